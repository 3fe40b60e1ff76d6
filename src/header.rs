use chrono::{DateTime, Local, TimeZone};

/// Stamp written into every generated file.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationStamp {
    pub timestamp: String,
    pub program: String,
}

impl GenerationStamp {
    pub fn new<Tz: TimeZone>(time: DateTime<Tz>, program: &str) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            timestamp: time.format("%Y-%m-%d %H:%M:%S %z").to_string(),
            program: program.into(),
        }
    }

    pub fn now(program: &str) -> Self {
        Self::new(Local::now(), program)
    }

    pub fn header(self: &Self, title: &str) -> Vec<String> {
        vec![
            "#coding: utf-8".into(),
            "#".into(),
            format!("# {}", title),
            format!("# generated {} by {}", self.timestamp, self.program),
            "#".into(),
        ]
    }
}
