use advocates_store::{seed, Advocate, AdvocateSource, AdvocateStore, SearchTerm};
use proptest::prelude::*;

fn ids(advocates: &[Advocate]) -> Vec<i64> {
    let mut ids: Vec<i64> = advocates.iter().filter_map(|a| a.id).collect();
    ids.sort_unstable();
    ids
}

fn arb_advocate() -> impl Strategy<Value = Advocate> {
    let word = "[A-Za-zÉéÜüÄäÖöß]{1,8}";
    (
        word,
        word,
        "[A-Za-zÜüÉé ]{1,10}",
        "(MD|PhD|MSW)",
        prop::collection::vec("[A-Za-zÄäÖö &/]{1,12}", 0..6),
        0u32..60,
        1_000_000_000i64..99_999_999_999i64,
    )
        .prop_map(|(first, last, city, degree, specialties, years, phone)| {
            Advocate::new(first, last, city, degree)
                .with_specialties(specialties)
                .with_years_of_experience(years)
                .with_phone_number(phone)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn filtered_results_agree_with_reference_predicate(
        advocates in prop::collection::vec(arb_advocate(), 0..12),
        raw_term in "[A-Za-z0-9ÉéÜüÄäÖö ]{1,4}",
    ) {
        let store = AdvocateStore::open_in_memory().unwrap();
        store.insert_all(&advocates).unwrap();

        let term = SearchTerm::parse(Some(&raw_term)).unwrap();
        let all = store.all().unwrap();
        let filtered = store.search(&term).unwrap();

        // filtered ⊆ unfiltered
        let all_ids = ids(&all);
        prop_assert!(ids(&filtered).iter().all(|id| all_ids.contains(id)));

        // every hit matches, and every match is a hit
        prop_assert!(filtered.iter().all(|a| term.matches(a)));
        let expected: Vec<Advocate> = all.iter().filter(|a| term.matches(a)).cloned().collect();
        prop_assert_eq!(ids(&filtered), ids(&expected));
    }
}

#[test]
fn test_absent_or_empty_term_means_unfiltered() {
    let store = AdvocateStore::open_in_memory().unwrap();
    store.insert_all(&seed::builtin().unwrap()).unwrap();

    assert!(SearchTerm::parse(Some("")).is_none());
    let all = store.all().unwrap();
    assert_eq!(all.len() as i64, store.count().unwrap());
}

#[test]
fn test_builtin_seed_lookups() {
    let store = AdvocateStore::open_in_memory().unwrap();
    store.insert_all(&seed::builtin().unwrap()).unwrap();

    let names = |t: &str| -> Vec<String> {
        store
            .search(&SearchTerm::parse(Some(t)).unwrap())
            .unwrap()
            .iter()
            .map(Advocate::full_name)
            .collect()
    };

    assert_eq!(names("san antonio"), vec!["Jessica Taylor"]);
    assert_eq!(names("ADHD"), vec!["Jessica Taylor"]);
    assert!(names("Trauma & PTSD").contains(&"Laura Clark".to_string()));
    assert!(names("zzz").is_empty());
}
