use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::config::HeaderConfig;

const WEEKDAYS: [&str; 7] = [
    "星期日", "星期一", "星期二", "星期三", "星期四", "星期五", "星期六",
];

/// Clock and date panel at the top of the home screen.
#[derive(Debug, Clone)]
pub struct HeaderWidget {
    now: NaiveDateTime,
    texts: HeaderConfig,
}

impl HeaderWidget {
    pub fn new(now: NaiveDateTime, texts: HeaderConfig) -> Self {
        Self { now, texts }
    }

    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    /// Advances the clock. Returns true when the visible time changed.
    pub fn tick(&mut self, now: NaiveDateTime) -> bool {
        let changed = format_time(&now) != format_time(&self.now) || now.date() != self.now.date();
        self.now = now;
        changed
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("{} {}\n", format_time(&self.now), time_period(self.now.hour())));
        out.push_str(&format_date(&self.now));
        out.push('\n');
        out.push_str(&self.texts.lunar);
        out.push('\n');
        out.push_str(&format!("{}    {}\n", self.texts.weather, self.texts.steps));
        out
    }
}

pub fn format_time(now: &NaiveDateTime) -> String {
    now.format("%H:%M").to_string()
}

pub fn format_date(now: &NaiveDateTime) -> String {
    let weekday = WEEKDAYS[now.weekday().num_days_from_sunday() as usize];
    format!("{} {}", now.format("%Y-%m-%d"), weekday)
}

pub fn time_period(hour: u32) -> &'static str {
    match hour {
        0..=5 => "凌晨",
        6..=11 => "上午",
        12 => "中午",
        13..=17 => "下午",
        _ => "晚上",
    }
}
