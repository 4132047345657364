use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::stats::correlation::pearson;
use crate::{AggregatedSeries, AlignedPoint, CorrelationResult, Observation, TidingsError};

fn index_by_date(
    series: &[Observation],
    label: &str,
) -> Result<BTreeMap<NaiveDate, f64>, TidingsError> {
    let mut map = BTreeMap::new();
    for o in series {
        if map.insert(o.date, o.value).is_some() {
            return Err(TidingsError::invalid_input(format!(
                "duplicate date {} in {label} series",
                o.date
            )));
        }
    }
    Ok(map)
}

/// Inner join of two dated series on exact date equality, in ascending date order.
///
/// # Errors
/// Returns `InvalidInput` if either series repeats a date.
pub fn align(left: &[Observation], right: &[Observation]) -> Result<Vec<AlignedPoint>, TidingsError> {
    let l = index_by_date(left, "left")?;
    let r = index_by_date(right, "right")?;
    Ok(l.into_iter()
        .filter_map(|(date, left)| {
            r.get(&date).map(|&right| AlignedPoint { date, left, right })
        })
        .collect())
}

/// Join two aggregated series on bucket start; buckets without a value do not join.
///
/// # Errors
/// See [`align`].
pub fn align_series(
    left: &AggregatedSeries,
    right: &AggregatedSeries,
) -> Result<Vec<AlignedPoint>, TidingsError> {
    align(&left.observations(), &right.observations())
}

/// Correlation between two named columns of a [`Panel`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairCorrelation {
    /// First column.
    pub left: String,
    /// Second column.
    pub right: String,
    /// Coefficient, or why it could not be computed.
    pub result: Result<CorrelationResult, TidingsError>,
}

/// Named series joined on the dates every one of them has.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    dates: Vec<NaiveDate>,
    columns: BTreeMap<String, Vec<f64>>,
}

impl Panel {
    /// Shared dates in ascending order.
    #[must_use]
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Number of shared dates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if the series have no date in common.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Column names in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Values of one column, parallel to [`Self::dates`].
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    /// Two columns as an alignment.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if either name is not a column.
    pub fn pair(&self, left: &str, right: &str) -> Result<Vec<AlignedPoint>, TidingsError> {
        let l = self.require(left)?;
        let r = self.require(right)?;
        Ok(self
            .dates
            .iter()
            .zip(l.iter().zip(r))
            .map(|(&date, (&left, &right))| AlignedPoint { date, left, right })
            .collect())
    }

    /// Pearson correlation of every unordered pair of columns.
    ///
    /// Pairs are listed in name order; a pair that cannot be correlated keeps its error.
    #[must_use]
    pub fn correlation_matrix(&self) -> Vec<PairCorrelation> {
        let names: Vec<&String> = self.columns.keys().collect();
        let mut out = Vec::new();
        for (i, a) in names.iter().enumerate() {
            for b in &names[i + 1..] {
                out.push(PairCorrelation {
                    left: (*a).clone(),
                    right: (*b).clone(),
                    result: pearson(&self.columns[*a], &self.columns[*b]),
                });
            }
        }
        out
    }

    fn require(&self, name: &str) -> Result<&[f64], TidingsError> {
        self.column(name)
            .ok_or_else(|| TidingsError::invalid_arg(format!("no series named '{name}' in panel")))
    }
}

/// Inner join of any number of named series.
///
/// # Errors
/// Returns `InvalidArgument` when no series is given or a name repeats, and
/// `InvalidInput` if a series repeats a date.
pub fn align_all<K, I>(series: I) -> Result<Panel, TidingsError>
where
    K: Into<String>,
    I: IntoIterator<Item = (K, Vec<Observation>)>,
{
    let mut indexed: BTreeMap<String, BTreeMap<NaiveDate, f64>> = BTreeMap::new();
    for (name, values) in series {
        let name = name.into();
        let map = index_by_date(&values, &name)?;
        if indexed.contains_key(&name) {
            return Err(TidingsError::invalid_arg(format!(
                "series '{name}' given more than once"
            )));
        }
        indexed.insert(name, map);
    }

    let mut maps = indexed.values();
    let Some(first) = maps.next() else {
        return Err(TidingsError::invalid_arg("align_all needs at least one series"));
    };
    let mut shared: BTreeSet<NaiveDate> = first.keys().copied().collect();
    for m in maps {
        shared.retain(|d| m.contains_key(d));
    }

    let dates: Vec<NaiveDate> = shared.into_iter().collect();
    let columns = indexed
        .into_iter()
        .map(|(name, m)| {
            let col = dates.iter().filter_map(|d| m.get(d).copied()).collect();
            (name, col)
        })
        .collect();

    Ok(Panel { dates, columns })
}
