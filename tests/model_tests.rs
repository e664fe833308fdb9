use roster::model::*;
use roster::RosterError;

// ==========================================================================
// PERSON SPEC ENCODING TESTS
// ==========================================================================

#[test]
fn uid_encodes_with_dollar_prefix() {
    let spec = PersonSpec::by_uid(42);
    assert_eq!(spec.path_component().unwrap(), "$42");
}

#[test]
fn login_encodes_as_itself() {
    let spec = PersonSpec::by_login("alice".into());
    assert_eq!(spec.path_component().unwrap(), "alice");
}

#[test]
fn email_encodes_as_itself() {
    let spec = PersonSpec::by_email("a@b.com".into());
    assert_eq!(spec.path_component().unwrap(), "a@b.com");
}

#[test]
fn email_takes_priority_over_login_and_uid() {
    let spec = PersonSpec {
        email: "a@b.com".into(),
        login: "alice".into(),
        uid: 42,
    };
    assert_eq!(spec.path_component().unwrap(), "a@b.com");
}

#[test]
fn login_takes_priority_over_uid() {
    let spec = PersonSpec {
        email: String::new(),
        login: "alice".into(),
        uid: 42,
    };
    assert_eq!(spec.path_component().unwrap(), "alice");
}

#[test]
fn empty_spec_fails_to_encode() {
    let spec = PersonSpec::default();
    assert!(matches!(
        spec.path_component(),
        Err(RosterError::EmptySpec)
    ));
}

// ==========================================================================
// PERSON SPEC PARSING TESTS
// ==========================================================================

#[test]
fn dollar_prefix_parses_as_uid() {
    assert_eq!(PersonSpec::parse("$42").unwrap(), PersonSpec::by_uid(42));
}

#[test]
fn text_with_at_sign_parses_as_email() {
    assert_eq!(
        PersonSpec::parse("dev@example.com").unwrap(),
        PersonSpec::by_email("dev@example.com".into())
    );
}

#[test]
fn plain_text_parses_as_login() {
    assert_eq!(
        PersonSpec::parse("alice").unwrap(),
        PersonSpec::by_login("alice".into())
    );
}

#[test]
fn non_numeric_uid_is_rejected() {
    let err = PersonSpec::parse("$notanumber").unwrap_err();
    assert!(matches!(err, RosterError::InvalidUid { .. }));
    assert!(err.to_string().contains("$notanumber"));
}

#[test]
fn negative_uid_is_rejected() {
    assert!(matches!(
        PersonSpec::parse("$-3"),
        Err(RosterError::InvalidUid { .. })
    ));
}

#[test]
fn empty_input_parses_to_unset_spec() {
    let spec = PersonSpec::parse("").unwrap();
    assert_eq!(spec, PersonSpec::default());
    // It only fails once someone tries to encode it.
    assert!(spec.path_component().is_err());
}

#[test]
fn spec_parses_via_fromstr() {
    let spec: PersonSpec = "$7".parse().unwrap();
    assert_eq!(spec, PersonSpec::by_uid(7));
}

#[test]
fn single_field_specs_roundtrip_through_path_component() {
    let specs = [
        PersonSpec::by_email("a@b.com".into()),
        PersonSpec::by_login("alice".into()),
        PersonSpec::by_uid(42),
    ];
    for spec in &specs {
        let component = spec.path_component().unwrap();
        assert_eq!(PersonSpec::parse(&component).unwrap(), *spec);
    }
}

// ==========================================================================
// PERSON TESTS
// ==========================================================================

#[test]
fn short_name_prefers_login() {
    let person = Person {
        spec: PersonSpec {
            email: "bob@example.com".into(),
            login: "bob".into(),
            uid: 7,
        },
        ..Default::default()
    };
    assert_eq!(person.short_name(), "bob");
}

#[test]
fn short_name_falls_back_to_email_local_part() {
    let person = Person {
        spec: PersonSpec::by_email("x@y.com".into()),
        ..Default::default()
    };
    assert_eq!(person.short_name(), "x");
}

#[test]
fn short_name_of_nameless_person_is_anonymous() {
    let person = Person::default();
    assert_eq!(person.short_name(), "(anonymous)");
}

#[test]
fn zero_uid_means_transient() {
    let person = Person {
        spec: PersonSpec::by_email("dev@example.com".into()),
        ..Default::default()
    };
    assert!(person.transient());
    assert!(!person.has_profile());
}

#[test]
fn nonzero_uid_means_registered() {
    let person = Person {
        spec: PersonSpec::by_uid(7),
        ..Default::default()
    };
    assert!(!person.transient());
    assert!(person.has_profile());
}

#[test]
fn avatar_url_of_size_appends_size_parameter() {
    let person = Person {
        avatar_url: "https://gravatar.example/a1".into(),
        ..Default::default()
    };
    assert_eq!(
        person.avatar_url_of_size(128),
        "https://gravatar.example/a1?s=128"
    );
}

#[test]
fn avatar_url_of_size_extends_existing_query() {
    let person = Person {
        avatar_url: "https://gravatar.example/a1?d=mm".into(),
        ..Default::default()
    };
    assert_eq!(
        person.avatar_url_of_size(64),
        "https://gravatar.example/a1?d=mm&s=64"
    );
}

#[test]
fn missing_avatar_stays_empty() {
    let person = Person::default();
    assert_eq!(person.avatar_url_of_size(128), "");
}

// ==========================================================================
// WIRE FORMAT TESTS
// ==========================================================================

#[test]
fn person_serializes_flat_with_wire_field_names() {
    let person = Person {
        spec: PersonSpec {
            email: "alice@example.com".into(),
            login: "alice".into(),
            uid: 42,
        },
        full_name: "Alice Example".into(),
        avatar_url: "https://gravatar.example/a1".into(),
    };
    let json = serde_json::to_value(&person).unwrap();
    assert_eq!(json["email"], "alice@example.com");
    assert_eq!(json["login"], "alice");
    assert_eq!(json["uid"], 42);
    assert_eq!(json["fullName"], "Alice Example");
    assert_eq!(json["avatarURL"], "https://gravatar.example/a1");
    assert!(json.get("spec").is_none());
}

#[test]
fn person_deserializes_from_full_profile() {
    let person: Person = serde_json::from_str(
        r#"{"login":"alice","uid":42,"email":"alice@example.com",
            "fullName":"Alice Example","avatarURL":"https://gravatar.example/a1"}"#,
    )
    .unwrap();
    assert_eq!(person.spec.login, "alice");
    assert_eq!(person.spec.uid, 42);
    assert_eq!(person.full_name, "Alice Example");
    assert!(person.has_profile());
}

#[test]
fn absent_fields_default_to_unset() {
    let person: Person = serde_json::from_str(r#"{"email":"dev@example.com"}"#).unwrap();
    assert_eq!(person.spec.email, "dev@example.com");
    assert_eq!(person.spec.login, "");
    assert_eq!(person.spec.uid, 0);
    assert_eq!(person.full_name, "");
    assert_eq!(person.avatar_url, "");
    assert!(person.transient());
}

// ==========================================================================
// STAT TYPE TESTS
// ==========================================================================

#[test]
fn stat_type_all_contains_every_tag() {
    let all = PersonStatType::ALL;
    assert!(all.contains(&PersonStatType::Authors));
    assert!(all.contains(&PersonStatType::Clients));
    assert!(all.contains(&PersonStatType::OwnedRepos));
    assert!(all.contains(&PersonStatType::ContributedToRepos));
    assert!(all.contains(&PersonStatType::Dependencies));
    assert!(all.contains(&PersonStatType::Dependents));
    assert!(all.contains(&PersonStatType::Defs));
    assert!(all.contains(&PersonStatType::ExportedDefs));
    assert_eq!(all.len(), 8);
}

#[test]
fn stat_type_tag_roundtrip() {
    for stat in PersonStatType::ALL {
        let tag = stat.as_str();
        assert_eq!(PersonStatType::from_tag(tag), Some(*stat));
    }
}

#[test]
fn stat_type_displays_as_its_tag() {
    assert_eq!(PersonStatType::OwnedRepos.to_string(), "owned-repos");
    assert_eq!(PersonStatType::ExportedDefs.to_string(), "exported-defs");
}

#[test]
fn unknown_stat_tag_is_rejected() {
    let err = "bogus".parse::<PersonStatType>().unwrap_err();
    assert!(matches!(err, RosterError::UnknownStatTag(_)));
    assert!(err.to_string().contains("bogus"));
}

#[test]
fn stats_serialize_with_kebab_case_keys() {
    let mut stats = PersonStats::new();
    stats.insert(PersonStatType::OwnedRepos, 3);
    stats.insert(PersonStatType::Defs, 120);

    let json = serde_json::to_value(&stats).unwrap();
    assert_eq!(json["owned-repos"], 3);
    assert_eq!(json["defs"], 120);

    let parsed: PersonStats = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, stats);
}
