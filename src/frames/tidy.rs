//! Reshapes the raw provincial daily list into the tidy daily table.

use crate::frames::daily_frame::DailyFrame;
use crate::frames::error::TransformError;
use crate::types::column_mapping::{ColumnMapping, DATE};
use crate::types::date_encoding::DateEncoding;
use log::{debug, warn};
use polars::prelude::*;

/// Turns the raw per-day table into a [`DailyFrame`].
///
/// 1. Drops columns matching one of the mapping's drop prefixes (the
///    upstream cumulative and "under care" fields, which are recomputed
///    locally by [`DailyFrame::cumulative`]).
/// 2. Lowercases every remaining column name.
/// 3. Renames through `mapping`; every source column it names must exist.
/// 4. Converts the date column using `encoding`.
///
/// The canonical columns (`date`, `new_cases`, `recovered`, `deaths`) come
/// first, any other kept column follows with its lowercased name. Row order
/// is unchanged.
///
/// # Errors
///
/// * [`TransformError::MissingColumn`] if a mapped column is absent.
/// * [`TransformError::DateConversion`] if a date value is null or out of range.
pub fn tidy(
    raw: DataFrame,
    mapping: &ColumnMapping,
    encoding: DateEncoding,
) -> Result<DailyFrame, TransformError> {
    let kept: Vec<PlSmallStr> = raw
        .get_column_names()
        .into_iter()
        .filter(|name| {
            let dropped = mapping.is_dropped(name);
            if dropped {
                debug!("Dropping column {}", name);
            }
            !dropped
        })
        .cloned()
        .collect();
    let mut df = raw.select(kept)?;

    let lowered: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_lowercase())
        .collect();
    df.set_column_names(lowered)?;

    let mut date_source = None;
    for (source, target) in mapping.renames() {
        if df.get_column_index(source).is_none() {
            return Err(TransformError::MissingColumn {
                column: source.clone(),
            });
        }
        if target == DATE {
            date_source = Some(source.as_str());
        }
    }
    let date_source = date_source.ok_or_else(|| TransformError::MissingColumn {
        column: DATE.to_string(),
    })?;
    let raw_dates = df.column(date_source)?.cast(&DataType::Int64)?;
    if let Some((row, value)) = raw_dates
        .i64()?
        .into_iter()
        .enumerate()
        .find(|(_, raw)| raw.and_then(|v| encoding.to_date(v)).is_none())
    {
        return Err(TransformError::DateConversion {
            row,
            value,
            encoding,
        });
    }

    let (existing, new): (Vec<&str>, Vec<&str>) = mapping
        .renames()
        .iter()
        .map(|(from, to)| (from.as_str(), to.as_str()))
        .unzip();
    let mut selection: Vec<Expr> = mapping
        .canonical_columns()
        .into_iter()
        .map(|name| {
            if name == DATE {
                encoding.to_date_expr(DATE)
            } else {
                col(name)
            }
        })
        .collect();
    selection.extend(
        df.get_column_names()
            .into_iter()
            .filter(|name| !existing.contains(&name.as_str()))
            .map(|name| col(name.as_str())),
    );

    let tidy = df.lazy().rename(existing, new, true).select(selection).collect()?;

    let dates = tidy.column(DATE)?;
    warn_if_unordered(dates)?;

    Ok(DailyFrame::new(tidy.lazy()))
}

fn warn_if_unordered(dates: &Column) -> Result<(), TransformError> {
    let days = dates.cast(&DataType::Int32)?;
    let days: Vec<i32> = days.i32()?.into_iter().flatten().collect();
    if let Some(row) = days.windows(2).position(|w| w[0] >= w[1]) {
        warn!(
            "Daily dates are not strictly increasing (row {}); aggregates sort by date",
            row + 1
        );
    }
    Ok(())
}
