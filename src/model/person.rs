use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub number: i64,
    pub email: String,
}

impl Person {
    fn new(id: &str, name: &str, phone: &str, number: i64, email: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            phone: phone.to_string(),
            number,
            email: email.to_string(),
        }
    }
}

/// Aggregator response body. Only built through [`Envelope::new`], so `count`
/// always matches `data.len()`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Envelope {
    pub success: bool,
    pub data: Vec<Person>,
    pub count: usize,
}

impl Envelope {
    pub fn new(data: Vec<Person>) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
        }
    }
}

/// The fixed dataset served by the mock backend, built fresh on every call.
pub fn sample_people() -> Vec<Person> {
    vec![
        Person::new("1", "Alice Johnson", "+1-555-0101", 1001, "alice.johnson@example.com"),
        Person::new("2", "Bob Smith", "+1-555-0102", 1002, "bob.smith@example.com"),
        Person::new("3", "Carol Davis", "+1-555-0103", 1003, "carol.davis@example.com"),
        Person::new("4", "David Wilson", "+1-555-0104", 1004, "david.wilson@example.com"),
        Person::new("5", "Eva Brown", "+1-555-0105", 1005, "eva.brown@example.com"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sample_records_are_complete_and_unique() {
        let people = sample_people();
        assert_eq!(people.len(), 5);

        let ids: HashSet<_> = people.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), people.len());

        for p in &people {
            assert!(!p.id.is_empty());
            assert!(!p.name.is_empty());
            assert!(!p.phone.is_empty());
            assert!(p.number > 0);
            assert!(p.email.contains('@'));
        }
    }

    #[test]
    fn sample_order_is_stable() {
        let names: Vec<_> = sample_people().into_iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            ["Alice Johnson", "Bob Smith", "Carol Davis", "David Wilson", "Eva Brown"]
        );
        assert_eq!(sample_people(), sample_people());
    }

    #[test]
    fn envelope_count_tracks_data() {
        let envelope = Envelope::new(sample_people());
        assert!(envelope.success);
        assert_eq!(envelope.count, envelope.data.len());

        let empty = Envelope::new(Vec::new());
        assert_eq!(empty.count, 0);
    }

    #[test]
    fn person_json_shape() {
        let json = serde_json::to_value(&sample_people()[0]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "1",
                "name": "Alice Johnson",
                "phone": "+1-555-0101",
                "number": 1001,
                "email": "alice.johnson@example.com"
            })
        );
    }

    #[test]
    fn partial_person_is_rejected() {
        let result = serde_json::from_str::<Vec<Person>>(r#"[{"id":"1","name":"x"}]"#);
        assert!(result.is_err());
    }
}
