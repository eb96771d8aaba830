use crate::frames::error::TransformError;
use polars::prelude::{Column, DataFrame};
use serde_json::{Map, Value};

/// Builds a table from a list of JSON objects, one column per key.
///
/// Columns are the union of all keys, in the order they are first seen.
/// A key missing from a record, or an explicit `null`, becomes a null cell.
/// Values must be integers; floats without a fractional part are accepted
/// since some exports write counts as `12.0`.
pub fn records_to_dataframe(records: &[Map<String, Value>]) -> Result<DataFrame, TransformError> {
    let mut names: Vec<&str> = Vec::new();
    for record in records {
        for key in record.keys() {
            if !names.contains(&key.as_str()) {
                names.push(key);
            }
        }
    }

    let columns = names
        .iter()
        .map(|name| {
            let values = records
                .iter()
                .enumerate()
                .map(|(row, record)| integer_cell(record.get(*name), name, row))
                .collect::<Result<Vec<Option<i64>>, _>>()?;
            Ok(Column::new((*name).into(), values))
        })
        .collect::<Result<Vec<Column>, TransformError>>()?;

    Ok(DataFrame::new(columns)?)
}

fn integer_cell(value: Option<&Value>, column: &str, row: usize) -> Result<Option<i64>, TransformError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_i64()
            .or_else(|| {
                value
                    .as_f64()
                    .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                    .map(|f| f as i64)
            })
            .map(Some)
            .ok_or_else(|| TransformError::NonIntegerValue {
                column: column.to_string(),
                row,
                value: value.to_string(),
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn objects(value: Value) -> Vec<Map<String, Value>> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_union_of_keys_with_nulls() -> Result<(), Box<dyn std::error::Error>> {
        let records = objects(json!([
            {"tanggal": 0, "KASUS": 4},
            {"tanggal": 1, "KASUS": null, "SEMBUH": 2.0}
        ]));
        let df = records_to_dataframe(&records)?;

        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 3);
        let cases = df.column("KASUS")?.i64()?;
        assert_eq!(cases.get(0), Some(4));
        assert_eq!(cases.get(1), None);
        let recovered = df.column("SEMBUH")?.i64()?;
        assert_eq!(recovered.get(0), None);
        assert_eq!(recovered.get(1), Some(2));
        Ok(())
    }

    #[test]
    fn test_rejects_text_values() {
        let records = objects(json!([{"tanggal": 0, "KASUS": "many"}]));
        let err = records_to_dataframe(&records).unwrap_err();
        match err {
            TransformError::NonIntegerValue { column, row, .. } => {
                assert_eq!(column, "KASUS");
                assert_eq!(row, 0);
            }
            other => panic!("expected NonIntegerValue, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_list() -> Result<(), TransformError> {
        let df = records_to_dataframe(&[])?;
        assert_eq!(df.width(), 0);
        Ok(())
    }
}
