use serde_json::Value;

use crate::models::raw_vacancy::{HabrCard, RawVacancy, NO_LINK};
use crate::models::vacancy::{VacancyRecord, NO_TITLE};
use crate::services::salary::{detect_currency, ordered_range, parse_salary};
use crate::utils::text::{non_blank, strip_tags};

/// Converts one raw listing into the canonical record shape.
pub fn normalize(raw: RawVacancy) -> VacancyRecord {
    match raw {
        RawVacancy::Json(item) => normalize_hh_item(&item),
        RawVacancy::Html(card) => normalize_habr_card(card),
    }
}

/// Normalizes an element of the HH `items` array. Absent or `null` fields become `None`,
/// absent salary figures become 0.
pub fn normalize_hh_item(item: &Value) -> VacancyRecord {
    let (salary_from, salary_to) =
        ordered_range(int_at(item, "/salary/from"), int_at(item, "/salary/to"));

    VacancyRecord {
        title: text_at(item, "/name").unwrap_or_else(|| NO_TITLE.to_string()),
        company: text_at(item, "/employer/name"),
        location: text_at(item, "/area/name"),
        description: text_at(item, "/snippet/responsibility")
            .and_then(|snippet| non_blank(&strip_tags(&snippet))),
        url: text_at(item, "/alternate_url"),
        experience: text_at(item, "/experience/name"),
        salary_from,
        salary_to,
        currency: text_at(item, "/salary/currency"),
        work_format: work_format(item),
    }
}

/// Normalizes a scraped Habr card, parsing its free-text salary.
pub fn normalize_habr_card(card: HabrCard) -> VacancyRecord {
    let (salary_from, salary_to) = parse_salary(card.salary_text.as_deref());
    let currency = card.salary_text.as_deref().and_then(detect_currency);

    VacancyRecord {
        title: non_blank(&card.title).unwrap_or_else(|| NO_TITLE.to_string()),
        company: card.company,
        location: card.location,
        description: card.description,
        url: (card.link != NO_LINK).then_some(card.link),
        experience: None,
        salary_from,
        salary_to,
        currency,
        work_format: None,
    }
}

fn text_at(item: &Value, pointer: &str) -> Option<String> {
    item.pointer(pointer)
        .and_then(Value::as_str)
        .and_then(non_blank)
}

fn int_at(item: &Value, pointer: &str) -> i64 {
    match item.pointer(pointer) {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        _ => 0,
    }
}

// HH used to send a single `{id, name}` object; the current API sends a list of them.
fn work_format(item: &Value) -> Option<String> {
    match item.get("work_format")? {
        Value::Object(_) => text_at(item, "/work_format/name"),
        Value::Array(formats) => {
            let names: Vec<String> = formats
                .iter()
                .filter_map(|format| format.get("name").and_then(Value::as_str))
                .filter_map(non_blank)
                .collect();
            (!names.is_empty()).then(|| names.join(", "))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn card(title: &str, link: &str, salary: Option<&str>) -> HabrCard {
        HabrCard {
            title: title.to_string(),
            link: link.to_string(),
            company: Some("Acme".to_string()),
            location: Some("Москва".to_string()),
            description: Some("Rust, Tokio".to_string()),
            salary_text: salary.map(str::to_string),
        }
    }

    #[test]
    fn hh_item_with_salary_keeps_figures_and_currency() {
        let record = normalize(RawVacancy::Json(json!({
            "name": "Rust developer",
            "employer": { "name": "Acme" },
            "area": { "name": "Москва" },
            "snippet": { "responsibility": "Build <highlighttext>Rust</highlighttext> services" },
            "alternate_url": "https://hh.ru/vacancy/1",
            "experience": { "name": "1–3 года" },
            "salary": { "from": 100000, "to": 150000, "currency": "RUR" },
            "work_format": { "name": "Удалённо" }
        })));

        assert_eq!(record.title, "Rust developer");
        assert_eq!(record.company.as_deref(), Some("Acme"));
        assert_eq!(record.location.as_deref(), Some("Москва"));
        assert_eq!(record.description.as_deref(), Some("Build Rust services"));
        assert_eq!(record.url.as_deref(), Some("https://hh.ru/vacancy/1"));
        assert_eq!(record.experience.as_deref(), Some("1–3 года"));
        assert_eq!(record.salary_from, 100000);
        assert_eq!(record.salary_to, 150000);
        assert_eq!(record.currency.as_deref(), Some("RUR"));
        assert_eq!(record.work_format.as_deref(), Some("Удалённо"));
    }

    #[test]
    fn hh_item_without_fields_falls_back() {
        let record = normalize_hh_item(&json!({}));
        assert_eq!(
            record,
            VacancyRecord {
                title: NO_TITLE.to_string(),
                company: None,
                location: None,
                description: None,
                url: None,
                experience: None,
                salary_from: 0,
                salary_to: 0,
                currency: None,
                work_format: None,
            }
        );
    }

    #[test]
    fn hh_null_salary_and_bounds_default_to_zero() {
        let record = normalize_hh_item(&json!({ "name": "QA", "salary": null }));
        assert_eq!((record.salary_from, record.salary_to), (0, 0));

        let record = normalize_hh_item(&json!({
            "name": "QA",
            "salary": { "from": null, "to": 90000, "currency": "RUR" }
        }));
        assert_eq!((record.salary_from, record.salary_to), (0, 90000));
    }

    #[test]
    fn hh_lower_bound_only_raises_upper_bound() {
        let record = normalize_hh_item(&json!({ "salary": { "from": 120000, "to": null } }));
        assert_eq!((record.salary_from, record.salary_to), (120000, 120000));
    }

    #[test]
    fn hh_work_format_list_is_joined() {
        let record = normalize_hh_item(&json!({
            "work_format": [{ "id": "REMOTE", "name": "Удалённо" }, { "id": "HYBRID", "name": "Гибрид" }]
        }));
        assert_eq!(record.work_format.as_deref(), Some("Удалённо, Гибрид"));

        let record = normalize_hh_item(&json!({ "work_format": [] }));
        assert_eq!(record.work_format, None);
    }

    #[test]
    fn hh_blank_name_uses_sentinel() {
        let record = normalize_hh_item(&json!({ "name": "  " }));
        assert_eq!(record.title, NO_TITLE);
    }

    #[test]
    fn habr_card_salary_text_is_parsed() {
        let record = normalize(RawVacancy::Html(card(
            "Rust developer",
            "https://career.habr.com/vacancies/1",
            Some("от 150 000 до 250 000 ₽"),
        )));

        assert_eq!(record.title, "Rust developer");
        assert_eq!(record.url.as_deref(), Some("https://career.habr.com/vacancies/1"));
        assert_eq!(record.salary_from, 150000);
        assert_eq!(record.salary_to, 250000);
        assert_eq!(record.currency.as_deref(), Some("RUR"));
        assert_eq!(record.experience, None);
    }

    #[test]
    fn habr_card_without_salary_or_link() {
        let record = normalize_habr_card(card(NO_TITLE, NO_LINK, None));
        assert_eq!(record.title, NO_TITLE);
        assert_eq!(record.url, None);
        assert_eq!((record.salary_from, record.salary_to), (0, 0));
        assert_eq!(record.currency, None);
    }
}
