use questlog_core::{
    build_index, enrich_task, partition_by_status, CalendarDay, CategoryFields, Record, RecordId,
    TaskDefinitionFields, TaskFields, TaskStatus, FALLBACK_XP,
};

const DEFINITION_ID: &str = "6975ec88c67aee72d346f89b";
const CATEGORY_ID: &str = "6975ec870ed5e30e8cfc909f";

fn definition(xp_override: Option<f64>, category_id: Option<&str>) -> Record<TaskDefinitionFields> {
    Record::new(
        RecordId::new(DEFINITION_ID),
        TaskDefinitionFields {
            title: Some("Morning pages".to_string()),
            xp_override,
            category_id: category_id
                .map(|id| format!("https://store.example/rest/apps/x/records/{id}")),
            ..TaskDefinitionFields::default()
        },
    )
}

fn category(base_xp: Option<f64>) -> Record<CategoryFields> {
    Record::new(
        RecordId::new(CATEGORY_ID),
        CategoryFields {
            name: Some("Discipline".to_string()),
            base_xp,
            ..CategoryFields::default()
        },
    )
}

fn task(id: &str, status: Option<TaskStatus>, definition_id: Option<&str>) -> Record<TaskFields> {
    Record::new(
        RecordId::new(id),
        TaskFields {
            status,
            task_definition_id: definition_id
                .map(|d| format!("https://store.example/rest/apps/x/records/{d}")),
            ..TaskFields::default()
        },
    )
}

#[test]
fn unresolvable_task_gets_fallback_reward() {
    let definitions = Vec::new();
    let categories = Vec::new();
    let def_index = build_index(&definitions);
    let cat_index = build_index(&categories);

    let raw = task("6975ec8a00a9eae13ac5b92b", Some(TaskStatus::Open), None);
    let enriched = enrich_task(&raw, &def_index, &cat_index);

    assert!(enriched.definition.is_none());
    assert!(enriched.category.is_none());
    assert_eq!(enriched.xp_reward, FALLBACK_XP);
}

#[test]
fn override_beats_category_base() {
    let definitions = vec![definition(Some(50.0), Some(CATEGORY_ID))];
    let categories = vec![category(Some(5.0))];
    let def_index = build_index(&definitions);
    let cat_index = build_index(&categories);

    let raw = task("6975ec8a00a9eae13ac5b92b", Some(TaskStatus::Open), Some(DEFINITION_ID));
    let enriched = enrich_task(&raw, &def_index, &cat_index);

    assert!(enriched.definition.is_some());
    assert!(enriched.category.is_some());
    assert_eq!(enriched.xp_reward, 50.0);
}

#[test]
fn category_base_applies_when_no_override() {
    let definitions = vec![definition(None, Some(CATEGORY_ID))];
    let categories = vec![category(Some(15.0))];
    let def_index = build_index(&definitions);
    let cat_index = build_index(&categories);

    let raw = task("6975ec8a00a9eae13ac5b92b", Some(TaskStatus::Open), Some(DEFINITION_ID));
    let enriched = enrich_task(&raw, &def_index, &cat_index);

    assert_eq!(enriched.xp_reward, 15.0);
}

#[test]
fn dangling_definition_reference_is_not_an_error() {
    let definitions = Vec::new();
    let categories = vec![category(Some(15.0))];
    let def_index = build_index(&definitions);
    let cat_index = build_index(&categories);

    let raw = task("6975ec8a00a9eae13ac5b92b", Some(TaskStatus::Open), Some(DEFINITION_ID));
    let enriched = enrich_task(&raw, &def_index, &cat_index);

    assert!(enriched.definition.is_none());
    // No category without a resolved definition to point at it.
    assert!(enriched.category.is_none());
    assert_eq!(enriched.xp_reward, FALLBACK_XP);
}

#[test]
fn partition_buckets_open_and_completed_today() {
    let definitions = Vec::new();
    let categories = Vec::new();
    let def_index = build_index(&definitions);
    let cat_index = build_index(&categories);
    let today = CalendarDay::parse("2025-01-01").unwrap();

    let mut done_today = task("6975ec8a82825967e078b82a", Some(TaskStatus::Done), None);
    done_today.fields.completed_at = Some("2025-01-01T08:00".to_string());
    let mut done_yesterday = task("6975ec8b240115de7a84dd82", Some(TaskStatus::Done), None);
    done_yesterday.fields.completed_at = Some("2024-12-31T22:15".to_string());
    let raw = vec![
        task("6975ec8a00a9eae13ac5b92b", Some(TaskStatus::Open), None),
        done_today,
        done_yesterday,
        task("6975ec8bb04dec6d94161866", Some(TaskStatus::Canceled), None),
        task("6975ec8930214ae3b085906a", None, None),
    ];

    let enriched: Vec<_> = raw
        .iter()
        .map(|t| enrich_task(t, &def_index, &cat_index))
        .collect();
    let partition = partition_by_status(enriched, today);

    assert_eq!(partition.open.len(), 1);
    assert_eq!(
        partition.open[0].task.record_id,
        RecordId::new("6975ec8a00a9eae13ac5b92b")
    );
    assert_eq!(partition.completed_today.len(), 1);
    assert_eq!(
        partition.completed_today[0].task.record_id,
        RecordId::new("6975ec8a82825967e078b82a")
    );
}

#[test]
fn done_without_completion_timestamp_lands_in_neither_bucket() {
    let definitions = Vec::new();
    let categories = Vec::new();
    let def_index = build_index(&definitions);
    let cat_index = build_index(&categories);
    let today = CalendarDay::parse("2025-01-01").unwrap();

    let raw = task("6975ec8a00a9eae13ac5b92b", Some(TaskStatus::Done), None);
    let enriched = vec![enrich_task(&raw, &def_index, &cat_index)];
    let partition = partition_by_status(enriched, today);

    assert!(partition.open.is_empty());
    assert!(partition.completed_today.is_empty());
}

#[test]
fn partition_preserves_input_order() {
    let definitions = Vec::new();
    let categories = Vec::new();
    let def_index = build_index(&definitions);
    let cat_index = build_index(&categories);
    let today = CalendarDay::parse("2025-01-01").unwrap();

    let ids = [
        "6975ec8a00a9eae13ac5b92b",
        "6975ec8a82825967e078b82a",
        "6975ec8b240115de7a84dd82",
    ];
    let enriched: Vec<_> = ids
        .iter()
        .map(|id| enrich_task(&task(id, Some(TaskStatus::Open), None), &def_index, &cat_index))
        .collect();
    let partition = partition_by_status(enriched, today);

    let ordered: Vec<_> = partition
        .open
        .iter()
        .map(|t| t.task.record_id.as_str().to_string())
        .collect();
    assert_eq!(ordered, ids);
}
