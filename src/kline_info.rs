// src/kline_info.rs

use chrono::{Local, Months, NaiveDate};

#[derive(Clone, Debug)]
pub struct KlineInfo {
    pub code: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl KlineInfo {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        KlineInfo {
            code: code.into(),
            name: name.into(),
            start_date,
            end_date,
        }
    }

    /// Descriptor covering the trailing month up to today, the default
    /// window for pattern scans.
    pub fn last_month(code: impl Into<String>, name: impl Into<String>) -> Self {
        let end_date = Local::now().date_naive();
        let start_date = end_date
            .checked_sub_months(Months::new(1))
            .unwrap_or(end_date);
        KlineInfo::new(code, name, start_date, end_date)
    }

    pub fn create_kline_infos(
        stocks: Vec<(String, String)>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Vec<Self> {
        stocks
            .into_iter()
            .map(|(code, name)| KlineInfo {
                code,
                name,
                start_date,
                end_date,
            })
            .collect()
    }
}
