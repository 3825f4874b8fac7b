//! Generated builders and matchers used together with `Partial`.

use anyhow::{Context, Result, ensure};
use partial::{HasId, HasOrganisationId, Partial};
use partial_fixture::{Incident, IncidentBuilder, Organisation, OrganisationBuilder, OrganisationMatcher};
use rstest::{fixture, rstest};

#[fixture]
fn organisation() -> Organisation {
    Organisation {
        id: "id".to_owned(),
        name: "name".to_owned(),
        optional_string: Some("something-here".to_owned()),
        bool_flag: true,
    }
}

#[rstest]
fn builder_tracks_only_set_fields() {
    let built = OrganisationBuilder::build([
        OrganisationBuilder::id("id".to_owned()),
        OrganisationBuilder::name("name".to_owned()),
    ]);
    assert_eq!(built.field_names(), ["id", "name"]);
    assert_eq!(built.subject().name, "name");
    assert!(!built.subject().bool_flag);
}

#[rstest]
fn builder_partial_matches_on_tracked_fields(mut organisation: Organisation) {
    let built = OrganisationBuilder::build([
        OrganisationBuilder::id("id".to_owned()),
        OrganisationBuilder::name("name".to_owned()),
        OrganisationBuilder::optional_string(Some("something-here".to_owned())),
    ]);
    assert!(built.matches(Some(&organisation)));

    organisation.optional_string = Some("something-else-here".to_owned());
    assert!(!built.matches(Some(&organisation)));
}

#[rstest]
fn builder_partial_applies_over_existing_value(organisation: Organisation) {
    let patch = OrganisationBuilder::build([OrganisationBuilder::name("renamed".to_owned())]);
    let patched = patch.apply(organisation.clone());
    assert_eq!(
        patched,
        Organisation {
            name: "renamed".to_owned(),
            ..organisation
        }
    );
}

#[rstest]
fn generated_accessors_read_conventional_fields() {
    let incident = IncidentBuilder::build([
        IncidentBuilder::id("incident-id".to_owned()),
        IncidentBuilder::organisation_id("org-id".to_owned()),
    ])
    .into_subject();
    assert_eq!(incident.id(), "incident-id");
    assert_eq!(incident.organisation_id(), "org-id");
}

#[rstest]
fn update_columns_come_from_tracked_fields() -> Result<()> {
    let patch = IncidentBuilder::build([
        IncidentBuilder::created_at(1_700_000_000),
        IncidentBuilder::organisation(None),
        IncidentBuilder::id("incident-id".to_owned()),
    ]);
    let columns = patch.tracked_columns().context("schema resolves")?;
    let names: Vec<_> = columns.iter().map(|column| column.name.as_str()).collect();
    ensure!(names == ["reported_at", "id"], "columns: {names:?}");
    Ok(())
}

#[rstest]
fn existing_values_track_every_column() -> Result<()> {
    let loaded = Incident {
        id: "incident-id".to_owned(),
        organisation_id: "org-id".to_owned(),
        organisation: Some(Box::default()),
        created_at: 1_700_000_000,
    };
    let tracked = Partial::from_existing(&loaded).context("schema resolves")?;
    ensure!(tracked.field_names() == ["id", "organisation_id", "created_at"]);
    ensure!(tracked.subject().organisation.is_none(), "relation copied");
    ensure!(tracked.matches(Some(&loaded)), "loaded value matches itself");
    Ok(())
}

#[rstest]
fn matcher_ignores_unspecified_fields(organisation: Organisation) {
    let matcher = Organisation::matcher([
        OrganisationMatcher::id("id".to_owned()),
        OrganisationMatcher::match_name(|name| name.starts_with("na")),
    ]);
    matcher.assert_matches(&organisation);
}

#[rstest]
fn later_matchers_take_precedence(organisation: Organisation) {
    let matcher = OrganisationMatcher::build([
        OrganisationMatcher::bool_flag(false),
        OrganisationMatcher::optional_string(None),
        OrganisationMatcher::bool_flag(true),
    ]);
    let failure = matcher.check(&organisation).expect_err("optional string differs");
    let fields: Vec<_> = failure.mismatches.iter().map(|mismatch| mismatch.field).collect();
    assert_eq!(fields, ["optional_string"]);
}
