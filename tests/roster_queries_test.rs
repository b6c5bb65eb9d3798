use church_census::{sample_roster, Person, PersonAggregate};

#[test]
fn test_sample_roster_queries() {
    let roster = sample_roster();

    assert_eq!(roster.count(), 5);

    let adults: Vec<&str> = roster.adults().into_iter().map(|p| p.name.as_str()).collect();
    assert_eq!(adults, vec!["Ana", "Ana", "Pedro", "Luis"]);

    let winner = roster.most_common_name().unwrap();
    let frequency = roster.iter().filter(|p| p.name == winner).count();
    assert_eq!(frequency, 2);
    assert_eq!(winner, "Ana");
}

#[test]
fn test_adults_is_an_order_preserving_subsequence() {
    let roster = sample_roster();
    for threshold in 0..=35 {
        let adults = roster.adults_at_least(threshold);
        let mut positions = adults.iter().map(|a| {
            roster
                .iter()
                .position(|p| std::ptr::eq(p, *a))
                .expect("adult must come from the roster")
        });
        let mut last = positions.next();
        for pos in positions {
            assert!(Some(pos) > last, "threshold {} reordered people", threshold);
            last = Some(pos);
        }
        assert!(roster.count() >= adults.len());
    }
    assert_eq!(roster.adults_at_least(0).len(), roster.count());
}

#[test]
fn test_caller_populated_roster() {
    let mut roster = PersonAggregate::default();
    assert_eq!(roster.most_common_name(), None);
    assert_eq!(roster.count(), 0);

    roster.push(Person::new("Pedro", 12));
    roster.extend(vec![Person::new("Marta", 40), Person::new("Marta", 41)]);

    assert_eq!(roster.count(), 3);
    assert_eq!(roster.most_common_name(), Some("Marta"));
    assert_eq!(roster.adult_names(18), vec!["Marta", "Marta"]);
    assert_eq!(
        roster.name_frequencies(),
        vec![("Pedro", 1), ("Marta", 2)]
    );
}

#[test]
fn test_roster_is_shareable_across_threads() {
    let roster = sample_roster();
    std::thread::scope(|s| {
        let a = s.spawn(|| roster.count());
        let b = s.spawn(|| roster.most_common_name().map(str::to_string));
        assert_eq!(a.join().unwrap(), 5);
        assert_eq!(b.join().unwrap().as_deref(), Some("Ana"));
    });
}
