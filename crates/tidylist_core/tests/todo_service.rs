use tidylist_core::{
    MemoryTodoRepository, ServiceError, TodoRequest, TodoService, User,
};

fn service() -> TodoService<MemoryTodoRepository> {
    TodoService::new(MemoryTodoRepository::new())
}

fn request(text: &str, user_id: i64) -> TodoRequest {
    TodoRequest {
        text: text.to_string(),
        user_id,
        completed: false,
    }
}

#[test]
fn create_trims_text_and_denormalizes_creator_name() {
    let service = service();

    let created = service.create_todo(&request("  buy milk  ", 1)).unwrap();

    assert_eq!(created.text, "buy milk");
    assert_eq!(created.user_id, 1);
    assert_eq!(created.created_by, "John Doe");
    assert!(!created.completed);
    assert_eq!(created.created_at, created.updated_at);
    assert!(created.id > 0);
}

#[test]
fn create_validates_text_before_user_lookup() {
    // No users seeded at all, so a user lookup would fail with UserNotFound;
    // the text check must win.
    let service = TodoService::new(MemoryTodoRepository::with_users(Vec::<User>::new()));

    let err = service.create_todo(&request("", 1)).unwrap_err();
    assert_eq!(err, ServiceError::InvalidText);

    let err = service.create_todo(&request("   \t ", 1)).unwrap_err();
    assert_eq!(err, ServiceError::InvalidText);
}

#[test]
fn create_rejects_non_positive_user_id_before_lookup() {
    let service = service();

    let err = service.create_todo(&request("buy milk", 0)).unwrap_err();
    assert_eq!(err, ServiceError::InvalidUserId(0));

    let err = service.create_todo(&request("buy milk", -4)).unwrap_err();
    assert_eq!(err, ServiceError::InvalidUserId(-4));
}

#[test]
fn create_rejects_unknown_user() {
    let service = service();

    let err = service.create_todo(&request("buy milk", 999)).unwrap_err();
    assert_eq!(err, ServiceError::UserNotFound(999));
    assert!(service.get_all_todos().is_empty());
}

#[test]
fn get_todo_by_id_validates_and_resolves() {
    let service = service();
    let created = service.create_todo(&request("find me", 2)).unwrap();

    assert_eq!(service.get_todo_by_id(created.id).unwrap(), created);
    assert_eq!(service.get_todo_by_id(0).unwrap_err(), ServiceError::InvalidId(0));
    assert_eq!(service.get_todo_by_id(99).unwrap_err(), ServiceError::NotFound(99));
}

#[test]
fn get_todos_by_user_filters_per_owner() {
    let service = service();

    service.create_todo(&request("a", 1)).unwrap();
    service.create_todo(&request("b", 1)).unwrap();
    service.create_todo(&request("c", 2)).unwrap();

    let owned = service.get_todos_by_user(1).unwrap();
    let texts: Vec<String> = owned.into_iter().map(|todo| todo.text).collect();
    assert_eq!(texts, vec!["a", "b"]);

    // Existing user with no todos is an empty result, not an error.
    assert!(service.get_todos_by_user(3).unwrap().is_empty());

    assert_eq!(
        service.get_todos_by_user(-1).unwrap_err(),
        ServiceError::InvalidUserId(-1)
    );
    assert_eq!(
        service.get_todos_by_user(999).unwrap_err(),
        ServiceError::UserNotFound(999)
    );
}

#[test]
fn get_all_users_returns_seeded_set() {
    let service = service();
    let mut names: Vec<String> = service.get_all_users().into_iter().map(|user| user.name).collect();
    names.sort();
    assert_eq!(names, vec!["Bob Johnson", "Jane Smith", "John Doe"]);
}

#[test]
fn toggle_flips_completed_and_advances_updated_at() {
    let service = service();
    let created = service.create_todo(&request("cycle", 1)).unwrap();
    assert!(!created.completed);

    let once = service.toggle_todo(created.id).unwrap();
    assert!(once.completed);
    assert!(once.updated_at > created.updated_at);

    let twice = service.toggle_todo(created.id).unwrap();
    assert!(!twice.completed);
    assert!(twice.updated_at > once.updated_at);

    // created_at and ownership survive the mutations.
    assert_eq!(twice.created_at, created.created_at);
    assert_eq!(twice.user_id, created.user_id);
    assert_eq!(twice.created_by, created.created_by);
}

#[test]
fn toggle_rejects_invalid_and_missing_ids() {
    let service = service();
    assert_eq!(service.toggle_todo(0).unwrap_err(), ServiceError::InvalidId(0));
    assert_eq!(service.toggle_todo(5).unwrap_err(), ServiceError::NotFound(5));
}

#[test]
fn update_overwrites_text_and_completed_only() {
    let service = service();
    let created = service.create_todo(&request("draft", 2)).unwrap();

    let updated = service
        .update_todo(
            created.id,
            &TodoRequest {
                text: "  final  ".to_string(),
                // A different (well-formed) owner in the request must not
                // change the stored ownership.
                user_id: 1,
                completed: true,
            },
        )
        .unwrap();

    assert_eq!(updated.text, "final");
    assert!(updated.completed);
    assert!(updated.updated_at > created.updated_at);
    assert_eq!(updated.user_id, 2);
    assert_eq!(updated.created_by, "Jane Smith");
    assert_eq!(updated.created_at, created.created_at);
}

#[test]
fn update_validates_request_shape() {
    let service = service();
    let created = service.create_todo(&request("draft", 1)).unwrap();

    assert_eq!(
        service.update_todo(0, &request("x", 1)).unwrap_err(),
        ServiceError::InvalidId(0)
    );
    assert_eq!(
        service.update_todo(created.id, &request("   ", 1)).unwrap_err(),
        ServiceError::InvalidText
    );
    assert_eq!(
        service.update_todo(created.id, &request("x", 0)).unwrap_err(),
        ServiceError::InvalidUserId(0)
    );
    assert_eq!(
        service.update_todo(99, &request("x", 1)).unwrap_err(),
        ServiceError::NotFound(99)
    );
}

#[test]
fn delete_then_operate_fails_with_not_found() {
    let service = service();
    let created = service.create_todo(&request("doomed", 1)).unwrap();

    service.delete_todo(created.id).unwrap();

    assert_eq!(
        service.delete_todo(created.id).unwrap_err(),
        ServiceError::NotFound(created.id)
    );
    assert_eq!(
        service.toggle_todo(created.id).unwrap_err(),
        ServiceError::NotFound(created.id)
    );
    assert_eq!(
        service.update_todo(created.id, &request("x", 1)).unwrap_err(),
        ServiceError::NotFound(created.id)
    );
    assert_eq!(
        service.get_todo_by_id(created.id).unwrap_err(),
        ServiceError::NotFound(created.id)
    );
}

#[test]
fn delete_rejects_invalid_id() {
    let service = service();
    assert_eq!(service.delete_todo(-1).unwrap_err(), ServiceError::InvalidId(-1));
}

#[test]
fn create_over_custom_seed_resolves_that_owner() {
    let repo = MemoryTodoRepository::with_users([User::new(7, "Ada", "ada@example.com")]);
    let service = TodoService::new(repo);

    let created = service.create_todo(&request("verify", 7)).unwrap();
    assert_eq!(created.created_by, "Ada");

    let err = service.create_todo(&request("verify", 1)).unwrap_err();
    assert_eq!(err, ServiceError::UserNotFound(1));
}
