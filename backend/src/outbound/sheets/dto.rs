//! Request body for the Sheets `values:append` call.

use chrono::SecondsFormat;
use serde::Serialize;

use crate::domain::Wish;

/// One row in the column order `Name, Message, Email, Timestamp`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct AppendRowDto {
    major_dimension: &'static str,
    values: [[String; 4]; 1],
}

impl From<&Wish> for AppendRowDto {
    fn from(wish: &Wish) -> Self {
        Self {
            major_dimension: "ROWS",
            values: [[
                wish.name().to_owned(),
                wish.message().to_owned(),
                wish.email().unwrap_or_default().to_owned(),
                wish.timestamp()
                    .to_rfc3339_opts(SecondsFormat::Millis, true),
            ]],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn serialises_one_row_in_column_order() {
        let received_at = Utc
            .with_ymd_and_hms(2025, 5, 1, 6, 30, 0)
            .single()
            .expect("valid timestamp");
        let wish = Wish::parse(&json!({ "name": "Asha", "message": "Congrats!" }), received_at)
            .expect("valid wish");

        let body = serde_json::to_value(AppendRowDto::from(&wish)).expect("serialise");
        assert_eq!(
            body,
            json!({
                "majorDimension": "ROWS",
                "values": [["Asha", "Congrats!", "", "2025-05-01T06:30:00.000Z"]],
            })
        );
    }
}
