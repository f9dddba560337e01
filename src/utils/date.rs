use chrono::{Datelike, NaiveDate, Weekday};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((next - first).num_days() as u32)
}

pub fn all_days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(first) => first.iter_days().take_while(|d| d.month() == month).collect(),
        None => Vec::new(),
    }
}

pub fn all_days_of_year(year: i32) -> Vec<NaiveDate> {
    match NaiveDate::from_ymd_opt(year, 1, 1) {
        Some(first) => first.iter_days().take_while(|d| d.year() == year).collect(),
        None => Vec::new(),
    }
}

/// A calendar period given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Month(i32, u32),
    Year(i32),
}

impl Period {
    pub fn current_month() -> Self {
        let t = today();
        Period::Month(t.year(), t.month())
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        match *self {
            Period::Month(y, m) => all_days_of_month(y, m),
            Period::Year(y) => all_days_of_year(y),
        }
    }
}

/// Parse `YYYY-MM` or `YYYY`.
pub fn parse_period(p: &str) -> Result<Period, String> {
    let p = p.trim();

    // YYYY-MM
    if let Ok(d) = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d") {
        return Ok(Period::Month(d.year(), d.month()));
    }

    // YYYY
    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
    {
        return Ok(Period::Year(year));
    }

    Err(format!("Invalid period: {}", p))
}

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTHS_RU: [&str; 12] = [
    "Январь",
    "Февраль",
    "Март",
    "Апрель",
    "Май",
    "Июнь",
    "Июль",
    "Август",
    "Сентябрь",
    "Октябрь",
    "Ноябрь",
    "Декабрь",
];

pub fn month_name(month: u32, language: &str) -> &'static str {
    let idx = (month.clamp(1, 12) - 1) as usize;
    if language == "ru" {
        MONTHS_RU[idx]
    } else {
        MONTHS_EN[idx]
    }
}

pub fn weekday_label(w: Weekday, language: &str) -> &'static str {
    let (en, ru) = match w {
        Weekday::Mon => ("Mo", "Пн"),
        Weekday::Tue => ("Tu", "Вт"),
        Weekday::Wed => ("We", "Ср"),
        Weekday::Thu => ("Th", "Чт"),
        Weekday::Fri => ("Fr", "Пт"),
        Weekday::Sat => ("Sa", "Сб"),
        Weekday::Sun => ("Su", "Вс"),
    };
    if language == "ru" { ru } else { en }
}

/// `DD.MM.YYYY` for Russian output, ISO otherwise.
pub fn format_display(d: NaiveDate, language: &str) -> String {
    if language == "ru" {
        d.format("%d.%m.%Y").to_string()
    } else {
        d.format("%Y-%m-%d").to_string()
    }
}
