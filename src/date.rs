use chrono::{Datelike, Local};

pub fn current_year() -> i32 {
    Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn local_year_is_within_a_day_of_utc() {
        let utc = Utc::now().year();
        assert!((current_year() - utc).abs() <= 1);
        assert!(current_year() >= 2025);
    }
}
