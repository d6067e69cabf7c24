#[cfg(test)]
mod tests {
    use taskbook::db::tasks::Tasks;
    use taskbook::libs::error::TaskError;
    use taskbook::libs::task::TaskInput;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TaskTestContext {
        tasks: Tasks,
        _temp_dir: TempDir,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let tasks = Tasks::open(&temp_dir.path().join("taskbook.db")).unwrap();
            TaskTestContext { tasks, _temp_dir: temp_dir }
        }
    }

    fn ranks(tasks: &mut Tasks) -> Vec<(String, i64)> {
        tasks.list_all().unwrap().into_iter().map(|t| (t.name, t.rank)).collect()
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_create_assigns_ranks_in_creation_order(ctx: &mut TaskTestContext) {
        for i in 1..=5 {
            let task = ctx.tasks.create(&TaskInput::new(&format!("Task {}", i), "10", "01/01/2026")).unwrap();
            assert_eq!(task.rank, i);
        }

        let all = ctx.tasks.list_all().unwrap();
        let ranks: Vec<i64> = all.iter().map(|t| t.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5]);
        assert_eq!(all[0].name, "Task 1");
        assert_eq!(all[4].name, "Task 5");
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_create_stores_parsed_fields(ctx: &mut TaskTestContext) {
        let created = ctx.tasks.create(&TaskInput::new("  Report  ", "1000,50", "31/12/2025")).unwrap();

        let fetched = ctx.tasks.get(created.id).unwrap().unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.name, "Report");
        assert_eq!(fetched.cost, 1000.5);
        assert_eq!(fetched.due_date_text(), "31/12/2025");
        assert_eq!(fetched.rank, 1);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_create_duplicate_name_leaves_store_unchanged(ctx: &mut TaskTestContext) {
        ctx.tasks.create(&TaskInput::new("Report", "1000", "31/12/2025")).unwrap();
        let before = ctx.tasks.list_all().unwrap();

        let result = ctx.tasks.create(&TaskInput::new("Report", "5", "01/01/2026"));
        assert!(matches!(result, Err(TaskError::DuplicateName(ref name)) if name == "Report"));

        assert_eq!(ctx.tasks.list_all().unwrap(), before);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_names_are_case_sensitive(ctx: &mut TaskTestContext) {
        ctx.tasks.create(&TaskInput::new("Report", "1", "01/01/2026")).unwrap();
        ctx.tasks.create(&TaskInput::new("report", "1", "01/01/2026")).unwrap();

        assert_eq!(ctx.tasks.list_all().unwrap().len(), 2);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_invalid_input_does_not_mutate(ctx: &mut TaskTestContext) {
        ctx.tasks.create(&TaskInput::new("Report", "1000", "31/12/2025")).unwrap();

        let bad_date = ctx.tasks.create(&TaskInput::new("Review", "250", "2025-12-31"));
        assert!(matches!(bad_date, Err(TaskError::InvalidInput(_))));

        let bad_cost = ctx.tasks.create(&TaskInput::new("Review", "abc", "15/01/2026"));
        assert!(matches!(bad_cost, Err(TaskError::InvalidInput(_))));

        let missing = ctx.tasks.create(&TaskInput::new("Review", "", "15/01/2026"));
        assert!(matches!(missing, Err(TaskError::InvalidInput(_))));

        assert_eq!(ranks(&mut ctx.tasks), vec![("Report".to_string(), 1)]);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_keeps_rank(ctx: &mut TaskTestContext) {
        ctx.tasks.create(&TaskInput::new("Report", "1000", "31/12/2025")).unwrap();
        let review = ctx.tasks.create(&TaskInput::new("Review", "250", "15/01/2026")).unwrap();

        let updated = ctx.tasks.update(review.id, &TaskInput::new("Code review", "300.75", "20/01/2026")).unwrap();
        assert_eq!(updated.rank, 2);

        let fetched = ctx.tasks.get(review.id).unwrap().unwrap();
        assert_eq!(fetched.name, "Code review");
        assert_eq!(fetched.cost, 300.75);
        assert_eq!(fetched.due_date_text(), "20/01/2026");
        assert_eq!(fetched.rank, 2);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_can_keep_own_name(ctx: &mut TaskTestContext) {
        let task = ctx.tasks.create(&TaskInput::new("Report", "1000", "31/12/2025")).unwrap();

        let updated = ctx.tasks.update(task.id, &TaskInput::new("Report", "1200", "31/12/2025")).unwrap();
        assert_eq!(updated.cost, 1200.0);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_from_prefilled_input_keeps_cost(ctx: &mut TaskTestContext) {
        let task = ctx.tasks.create(&TaskInput::new("Report", "1200,555", "31/12/2025")).unwrap();

        let input = TaskInput {
            name: "Renamed".to_string(),
            ..TaskInput::from_task(&task)
        };
        ctx.tasks.update(task.id, &input).unwrap();

        let fetched = ctx.tasks.get(task.id).unwrap().unwrap();
        assert_eq!(fetched.name, "Renamed");
        assert_eq!(fetched.cost, 1200.555);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_errors(ctx: &mut TaskTestContext) {
        ctx.tasks.create(&TaskInput::new("Report", "1000", "31/12/2025")).unwrap();
        let review = ctx.tasks.create(&TaskInput::new("Review", "250", "15/01/2026")).unwrap();

        let missing = ctx.tasks.update(999, &TaskInput::new("Other", "1", "01/01/2026"));
        assert!(matches!(missing, Err(TaskError::NotFound(999))));

        let duplicate = ctx.tasks.update(review.id, &TaskInput::new("Report", "1", "01/01/2026"));
        assert!(matches!(duplicate, Err(TaskError::DuplicateName(_))));

        let invalid = ctx.tasks.update(review.id, &TaskInput::new("Review", "1", "32/01/2026"));
        assert!(matches!(invalid, Err(TaskError::InvalidInput(_))));

        let fetched = ctx.tasks.get(review.id).unwrap().unwrap();
        assert_eq!(fetched, review);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_leaves_rank_gap(ctx: &mut TaskTestContext) {
        ctx.tasks.create(&TaskInput::new("A", "1", "01/01/2026")).unwrap();
        let b = ctx.tasks.create(&TaskInput::new("B", "2", "01/01/2026")).unwrap();
        ctx.tasks.create(&TaskInput::new("C", "3", "01/01/2026")).unwrap();

        let deleted = ctx.tasks.delete(b.id).unwrap();
        assert_eq!(deleted.name, "B");
        assert!(ctx.tasks.get(b.id).unwrap().is_none());

        assert_eq!(ranks(&mut ctx.tasks), vec![("A".to_string(), 1), ("C".to_string(), 3)]);

        // New tasks still go after the highest rank
        let d = ctx.tasks.create(&TaskInput::new("D", "4", "01/01/2026")).unwrap();
        assert_eq!(d.rank, 4);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_missing_task(ctx: &mut TaskTestContext) {
        let result = ctx.tasks.delete(42);
        assert!(matches!(result, Err(TaskError::NotFound(42))));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_deleted_name_can_be_reused(ctx: &mut TaskTestContext) {
        let task = ctx.tasks.create(&TaskInput::new("Report", "1", "01/01/2026")).unwrap();
        ctx.tasks.delete(task.id).unwrap();

        let again = ctx.tasks.create(&TaskInput::new("Report", "1", "01/01/2026")).unwrap();
        assert_eq!(again.rank, 1);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_stats(ctx: &mut TaskTestContext) {
        let empty = ctx.tasks.stats().unwrap();
        assert_eq!(empty.count, 0);
        assert_eq!(empty.total_cost, 0.0);

        ctx.tasks.create(&TaskInput::new("Report", "500.0", "31/12/2025")).unwrap();
        ctx.tasks.create(&TaskInput::new("Review", "1200,50", "15/01/2026")).unwrap();

        let stats = ctx.tasks.stats().unwrap();
        assert_eq!(stats.count, 2);
        assert_eq!(stats.total_cost, 1700.5);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_reset_sequence_reuses_freed_ids(ctx: &mut TaskTestContext) {
        ctx.tasks.create(&TaskInput::new("A", "1", "01/01/2026")).unwrap();
        ctx.tasks.create(&TaskInput::new("B", "1", "01/01/2026")).unwrap();
        let c = ctx.tasks.create(&TaskInput::new("C", "1", "01/01/2026")).unwrap();
        assert_eq!(c.id, 3);

        ctx.tasks.delete(c.id).unwrap();
        let removed = ctx.tasks.reset_sequence().unwrap();
        assert_eq!(removed, 1);

        let d = ctx.tasks.create(&TaskInput::new("D", "1", "01/01/2026")).unwrap();
        assert_eq!(d.id, 3);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_ids_not_reused_without_reset(ctx: &mut TaskTestContext) {
        ctx.tasks.create(&TaskInput::new("A", "1", "01/01/2026")).unwrap();
        let b = ctx.tasks.create(&TaskInput::new("B", "1", "01/01/2026")).unwrap();
        ctx.tasks.delete(b.id).unwrap();

        let c = ctx.tasks.create(&TaskInput::new("C", "1", "01/01/2026")).unwrap();
        assert_eq!(c.id, 3);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_data_survives_reopen(ctx: &mut TaskTestContext) {
        ctx.tasks.create(&TaskInput::new("Report", "1000", "31/12/2025")).unwrap();

        let path = ctx._temp_dir.path().join("taskbook.db");
        let mut reopened = Tasks::open(&path).unwrap();
        let all = reopened.list_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Report");
    }
}
