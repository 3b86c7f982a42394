use contacts_core::{
    Address, CurrentModule, Email, Github, InMemoryPersonRepository, Lesson, Name, Person,
    PersonBuilder, PersonError, PersonPredicate, PersonRepository, PersonService, Phone,
    PredicateExt, PreviousModule, PrevModContainsKeywordsPredicate, RepoError, ServiceError, Tag,
    TagsContainsKeywordsPredicate,
};

fn person(name: &str, tags: &[&str], curr: &[&str], prev: &[&str]) -> Person {
    PersonBuilder::new(
        Name::new(name).unwrap(),
        Phone::new("98765432").unwrap(),
        Email::new("contact@example.com").unwrap(),
        Address::new("311, Clementi Ave 2, #02-25").unwrap(),
        Github::new("contact").unwrap(),
    )
    .tags(tags.iter().map(|value| Tag::new(*value).unwrap()))
    .curr_modules(curr.iter().map(|value| CurrentModule::new(*value).unwrap()))
    .prev_modules(prev.iter().map(|value| PreviousModule::new(*value).unwrap()))
    .build()
    .unwrap()
}

fn service() -> PersonService<InMemoryPersonRepository> {
    let repo = InMemoryPersonRepository::from_persons([
        person("Alice Pauline", &["friends"], &["CS2103T"], &["CS1101S"]),
        person("Benson Meier", &["owesMoney", "friends"], &[], &["CS1231"]),
        person("Carl Kurz", &[], &["CS2101", "CS2103T"], &[]),
    ])
    .unwrap();
    PersonService::new(repo)
}

fn lesson(value: &str) -> Lesson {
    value.parse().unwrap()
}

#[test]
fn add_lesson_updates_person_at_index() {
    let mut service = service();
    let tutorial = lesson("CS2103T WED 10:00-11:00");

    let updated = service.add_lesson(1, tutorial.clone()).unwrap();
    assert!(updated.lessons().contains(&tutorial));

    let stored = service.repo().get_person(1).unwrap();
    assert_eq!(stored, updated);
    assert!(service.repo().get_person(0).unwrap().lessons().is_empty());
}

#[test]
fn lesson_operations_reject_invalid_index() {
    let mut service = service();
    let err = service
        .add_lesson(3, lesson("CS2103T WED 10:00-11:00"))
        .unwrap_err();
    assert_eq!(err, ServiceError::InvalidIndex { index: 3, len: 3 });
}

#[test]
fn remove_missing_lesson_keeps_repository_unchanged() {
    let mut service = service();
    let before = service.list_persons();

    let err = service
        .remove_lesson(0, &lesson("CS2103T WED 10:00-11:00"))
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Person(PersonError::LessonNotFound(_))
    ));
    assert_eq!(service.list_persons(), before);
}

#[test]
fn remove_lesson_after_add() {
    let mut service = service();
    let tutorial = lesson("CS2101 THU 16:00-18:00");
    service.add_lesson(2, tutorial.clone()).unwrap();

    let updated = service.remove_lesson(2, &tutorial).unwrap();
    assert!(updated.lessons().is_empty());
}

#[test]
fn end_term_promotes_everyone_once() {
    let mut service = service();

    assert_eq!(service.end_term().unwrap(), 2);
    for stored in service.list_persons() {
        assert!(stored.curr_modules().is_empty());
    }
    let carl = service.repo().get_person(2).unwrap();
    assert_eq!(carl.prev_modules().len(), 2);

    let snapshot = service.list_persons();
    assert_eq!(service.end_term().unwrap(), 0);
    assert_eq!(service.list_persons(), snapshot);
}

#[test]
fn update_prev_mods_for_single_person() {
    let mut service = service();
    let alice = service.update_prev_mods(0).unwrap();
    assert!(alice.curr_modules().is_empty());
    assert_eq!(alice.prev_modules().len(), 2);
    assert_eq!(
        service.repo().get_person(2).unwrap().curr_modules().len(),
        2
    );
}

#[test]
fn find_by_tags_and_prev_mods() {
    let mut service = service();

    let friends: Vec<String> = service
        .find_by_tags("FRIENDS")
        .iter()
        .map(|person| person.name().to_string())
        .collect();
    assert_eq!(friends, vec!["Alice Pauline", "Benson Meier"]);

    assert!(service.find_by_prev_mods("CS2103T").is_empty());
    service.end_term().unwrap();
    assert_eq!(service.find_by_prev_mods("cs2103t").len(), 2);
    assert_eq!(service.find_by_name("kurz").len(), 1);
}

#[test]
fn repository_filters_with_composed_predicates() {
    let service = service();
    let predicate = TagsContainsKeywordsPredicate::new("friends")
        .and(PrevModContainsKeywordsPredicate::new("CS1231"));
    assert!(predicate.test(&service.repo().get_person(1).unwrap()));

    let matches = service.repo().filter_persons(&predicate);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].name().as_str(), "Benson Meier");
}

#[test]
fn repository_rejects_duplicates() {
    let mut service = service();
    let err = service
        .add_person(person("Alice Pauline", &[], &[], &[]))
        .unwrap_err();
    assert_eq!(
        err,
        ServiceError::Repo(RepoError::DuplicatePerson("Alice Pauline".to_string()))
    );

    let mut repo = service.into_repo();
    let clash = repo
        .set_person(1, person("Alice Pauline", &[], &[], &[]))
        .unwrap_err();
    assert!(matches!(clash, RepoError::DuplicatePerson(_)));

    repo.set_person(0, person("Alice Pauline", &["colleagues"], &[], &[]))
        .unwrap();
    assert_eq!(repo.len(), 3);
}

#[test]
fn remove_person_shifts_indexes() {
    let mut repo = service().into_repo();
    let removed = repo.remove_person(0).unwrap();
    assert_eq!(removed.name().as_str(), "Alice Pauline");
    assert_eq!(repo.get_person(0).unwrap().name().as_str(), "Benson Meier");
    assert_eq!(
        repo.remove_person(5).unwrap_err(),
        RepoError::IndexOutOfRange { index: 5, len: 2 }
    );
}
