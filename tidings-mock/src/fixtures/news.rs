use tidings_core::NewsRecord;

use super::aug;

const ROWS: &[(u32, &str, &str, &str)] = &[
    (1, "AAPL", "Apple to report quarterly results Thursday", "Benzinga Newsdesk"),
    (2, "AAPL", "Apple shares drop after weak guidance", "Lisa Levin"),
    (3, "AAPL", "Apple faces scrutiny over App Store fees", "Reuters"),
    (4, "AAPL", "Apple earnings miss as iPhone sales decline", "Zacks"),
    (7, "AAPL", "Analysts downgrade Apple on China concerns", "Lisa Levin"),
    (8, "AAPL", "Apple stock rises on strong services growth", "Benzinga Newsdesk"),
    (9, "AAPL", "Apple shares fall amid market slump", "Lisa Levin"),
    (10, "AAPL", "Apple gains after upgrade from Morgan Stanley", "Reuters"),
    (11, "AAPL", "Apple stock slightly lower in quiet trading", "Zacks"),
    (14, "AAPL", "Apple rally continues on record profits", "Benzinga Newsdesk"),
    (1, "MSFT", "Microsoft sets date for developer conference", "Reuters"),
    (2, "MSFT", "Microsoft drops on cloud concerns", "Lisa Levin"),
    (3, "MSFT", "Microsoft holds steady ahead of Azure event", "Zacks"),
    (4, "MSFT", "Microsoft Teams wins new enterprise deals", "Benzinga Newsdesk"),
    (7, "MSFT", "Microsoft AI push gets bullish analyst note", "Lisa Levin"),
    (8, "MSFT", "Microsoft faces antitrust risk in Europe", "Reuters"),
    (9, "MSFT", "Microsoft shares decline with tech sector", "Lisa Levin"),
    (10, "MSFT", "Microsoft Copilot pricing seen as profit boost", "Zacks"),
    (11, "MSFT", "Microsoft gaming unit hit by weak demand", "Benzinga Newsdesk"),
    (14, "MSFT", "Microsoft beats estimates for cloud adoption", "Lisa Levin"),
    (2, "TSLA", "Tesla shares plunge after CFO exit", "Reuters"),
    (3, "TSLA", "Tesla Cybertruck hits production breakthrough", "Benzinga Newsdesk"),
    (4, "TSLA", "Tesla price cuts raise margin worries", "Lisa Levin"),
    (7, "TSLA", "Tesla faces lawsuit over Autopilot claims", "Reuters"),
    (9, "TSLA", "Tesla stock falls as EV demand concerns grow", "Lisa Levin"),
    (10, "TSLA", "Tesla surges on strong China deliveries", "Zacks"),
    (
        14,
        "TSLA",
        "Stocks moving in Monday's after-hours session including Tesla, Apple, Microsoft and other large caps",
        "Benzinga Insights",
    ),
];

/// Every fixture article, sorted by date.
pub fn all() -> Vec<NewsRecord> {
    let mut out: Vec<NewsRecord> = ROWS
        .iter()
        .map(|&(day, ticker, headline, publisher)| {
            NewsRecord::new(aug(day), headline, publisher).with_ticker(ticker)
        })
        .collect();
    out.sort_by_key(|r| r.date);
    out
}
