#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use spesen::api::reports::{collect_tagged_pages, TimeEntry, MAX_REPORT_PAGES, ON_LOCATION_TAG};

    fn entry(start: &str, tags: &[&str]) -> TimeEntry {
        TimeEntry {
            start: start.to_string(),
            end: start.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            client: None,
        }
    }

    #[tokio::test]
    async fn test_pages_are_drained_until_the_first_empty_one() {
        let pages = vec![
            vec![entry("2023-05-01T09:00:00Z", &[ON_LOCATION_TAG]), entry("2023-05-02T09:00:00Z", &[ON_LOCATION_TAG])],
            vec![entry("2023-05-03T09:00:00Z", &[ON_LOCATION_TAG])],
            vec![],
            // Never requested: the loop stops at the empty page
            vec![entry("2023-05-31T09:00:00Z", &[ON_LOCATION_TAG])],
        ];

        let gathered = collect_tagged_pages(ON_LOCATION_TAG, move |page| {
            let entries = pages[(page - 1) as usize].clone();
            async move { Ok(entries) }
        })
        .await
        .unwrap();

        let starts: Vec<_> = gathered.iter().map(|e| e.start.as_str()).collect();
        assert_eq!(starts, vec!["2023-05-01T09:00:00Z", "2023-05-02T09:00:00Z", "2023-05-03T09:00:00Z"]);
    }

    #[tokio::test]
    async fn test_untagged_entries_are_dropped_even_next_to_tagged_ones() {
        let pages = vec![
            vec![
                entry("2023-05-01T09:00:00Z", &[ON_LOCATION_TAG, "billable"]),
                entry("2023-05-01T13:00:00Z", &["billable"]),
                entry("2023-05-01T15:00:00Z", &[]),
            ],
            vec![],
        ];

        let gathered = collect_tagged_pages(ON_LOCATION_TAG, move |page| {
            let entries = pages[(page - 1) as usize].clone();
            async move { Ok(entries) }
        })
        .await
        .unwrap();

        assert_eq!(gathered.len(), 1);
        assert_eq!(gathered[0].start, "2023-05-01T09:00:00Z");
    }

    #[tokio::test]
    async fn test_an_immediately_empty_result_is_fine() {
        let gathered = collect_tagged_pages(ON_LOCATION_TAG, |_page| async { Ok(Vec::new()) }).await.unwrap();
        assert!(gathered.is_empty());
    }

    #[tokio::test]
    async fn test_endless_pages_hit_the_bound_instead_of_looping() {
        let result = collect_tagged_pages(ON_LOCATION_TAG, |_page| async {
            Ok(vec![entry("2023-05-01T09:00:00Z", &[ON_LOCATION_TAG])])
        })
        .await;

        let err = result.unwrap_err();
        assert!(err.to_string().contains(&MAX_REPORT_PAGES.to_string()));
    }

    #[tokio::test]
    async fn test_a_failing_page_fetch_propagates() {
        let result = collect_tagged_pages(ON_LOCATION_TAG, |page| async move {
            match page {
                1 => Ok(vec![entry("2023-05-01T09:00:00Z", &[ON_LOCATION_TAG])]),
                _ => Err(anyhow!("connection reset")),
            }
        })
        .await;

        assert!(result.unwrap_err().to_string().contains("connection reset"));
    }

    #[test]
    fn test_time_entry_deserializes_from_a_report_payload() {
        // Trimmed from a real details response; unknown keys are ignored
        let body = r#"{
            "id": 123456789,
            "description": "customer visit",
            "start": "2023-05-01T09:00:00+02:00",
            "end": "2023-05-01T17:30:00+02:00",
            "dur": 30600000,
            "client": "Acme",
            "tags": ["on location", "billable"]
        }"#;

        let entry: TimeEntry = serde_json::from_str(body).unwrap();
        assert_eq!(entry.start, "2023-05-01T09:00:00+02:00");
        assert_eq!(entry.client.as_deref(), Some("Acme"));
        assert!(entry.has_tag(ON_LOCATION_TAG));
        assert!(!entry.has_tag("remote"));
    }

    #[test]
    fn test_time_entry_tolerates_missing_tags_and_client() {
        let body = r#"{"start": "2023-05-01T09:00:00Z", "end": "2023-05-01T10:00:00Z"}"#;

        let entry: TimeEntry = serde_json::from_str(body).unwrap();
        assert!(entry.tags.is_empty());
        assert!(entry.client.is_none());
        assert!(!entry.has_tag(ON_LOCATION_TAG));
    }

    #[test]
    fn test_timestamp_accessors_parse_rfc3339() {
        let entry = TimeEntry {
            start: "2023-05-01T09:00:00+02:00".to_string(),
            end: "2023-05-01T17:30:00+02:00".to_string(),
            tags: vec![ON_LOCATION_TAG.to_string()],
            client: None,
        };

        assert_eq!(entry.started_at().unwrap().to_rfc3339(), "2023-05-01T09:00:00+02:00");
        assert_eq!(entry.ended_at().unwrap().to_rfc3339(), "2023-05-01T17:30:00+02:00");

        let bad = TimeEntry {
            start: "05/01/2023 9am".to_string(),
            ..entry
        };
        assert!(bad.started_at().is_err());
    }
}
