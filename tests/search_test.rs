mod common;

use assert2::{check, let_assert};
use common::{engine, site, titles};
use rstest::rstest;
use site_search::{RecordKind, SearchEngine, SearchOutcome, SiteSearch};

// --- Ranking over the portfolio corpus ---

#[rstest]
fn aws_proyectos_finds_project_page(engine: SearchEngine) {
    let results = engine.search("AWS proyectos");

    check!(!results.is_empty());
    check!(results.iter().any(|r| r.record.url == "proyectos.html"));
    check!(
        titles(&results)
            == vec![
                "Experiencia en AWS",
                "Certificaciones AWS",
                "Infraestructura AWS Cloud-Native",
                "Información de Contacto",
                "Formulario de Contacto",
                "Desarrollador y Arquitecto de Software",
            ]
    );
    check!(results[0].score == 39);
    check!(results[3].score == 27);
}

#[rstest]
fn title_match_outranks_content_only_match(engine: SearchEngine) {
    let results = engine.search("microservicios");

    check!(results.len() == 3);
    check!(results[0].record.title == "Microservicios y Docker");
    check!(results[0].title_match);
    let last = &results[2];
    check!(last.record.title == "Desarrollador y Arquitecto de Software");
    check!(!last.title_match);
    check!(last.content_match);
    check!(results[0].score > last.score);
}

#[rstest]
fn frequent_term_is_capped_at_eight(engine: SearchEngine) {
    let results = engine.search("ci");

    check!(results.len() == 8);
    check!(results.windows(2).all(|w| w[0].score >= w[1].score));
    // Six records tie on 8 and keep index order
    let top: Vec<String> = titles(&results).into_iter().take(6).collect();
    check!(
        top == vec![
            "Experiencia en AWS",
            "Microservicios y Docker",
            "Experiencia Profesional - Exdesis",
            "Migración a Microservicios",
            "Optimización Bases de Datos",
            "Información de Contacto",
        ]
    );
}

#[rstest]
#[case("tecnologia")]
#[case("TECNOLOGÍA")]
#[case("tecnología")]
fn accents_and_case_do_not_matter(engine: SearchEngine, #[case] query: &str) {
    let results = engine.search(query);
    check!(titles(&results) == vec!["Tecnología y Open Source", "Gaming y Tecnología"]);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("*.*")]
#[case("日本語")]
fn degenerate_queries_return_empty(engine: SearchEngine, #[case] query: &str) {
    check!(engine.search(query).is_empty());
}

#[rstest]
fn repeated_queries_are_deterministic(engine: SearchEngine) {
    let ranked = |query: &str| -> Vec<(String, u32)> {
        engine
            .search(query)
            .iter()
            .map(|r| (r.record.title.clone(), r.score))
            .collect()
    };
    let first = ranked("machine learning");
    let second = ranked("machine learning");
    check!(first == second);
    check!(first.len() == 2);
}

// --- Presentation through the caller facade ---

#[rstest]
fn presented_results_carry_rendering_hints(site: SiteSearch) {
    let outcome = site.query("AWS proyectos");
    let_assert!(SearchOutcome::Found { results, .. } = &outcome);

    let project = results
        .iter()
        .find(|r| r.url == "proyectos.html")
        .expect("project page should be present");
    check!(project.kind == RecordKind::Project);
    check!(project.icon == "🚀");
    check!(project.section == "proyectos");
    check!(project.highlighted_title == "Infraestructura <mark>AWS</mark> Cloud-Native");

    check!(outcome.result_count() == 6);
    check!(outcome.announcement() == Some("Se encontraron 6 resultados para AWS proyectos".to_string()));
}

#[rstest]
fn snippet_shows_context_around_content_match(site: SiteSearch) {
    let outcome = site.query("microservicios");
    let_assert!(SearchOutcome::Found { results, .. } = outcome);

    let home = results
        .iter()
        .find(|r| r.highlighted_title == "Desarrollador y Arquitecto de Software")
        .expect("home page should match on content");
    check!(
        home.snippet
            == "... Torregrosa desarrollador arquitecto software AWS <mark>microservicios</mark> bases datos"
    );
}

#[rstest]
fn highlight_preserves_original_accents(site: SiteSearch) {
    let outcome = site.query("migracion");
    let_assert!(SearchOutcome::Found { results, .. } = outcome);
    check!(results[0].highlighted_title == "<mark>Migración</mark> a Microservicios");
    check!(results[0].snippet.starts_with("<mark>migración</mark> monolítico"));
}

#[rstest]
fn short_and_empty_queries_are_distinguishable(site: SiteSearch) {
    check!(site.query("a") == SearchOutcome::BelowMinimum);
    check!(
        site.query("kotlin")
            == SearchOutcome::NoResults {
                query: "kotlin".to_string()
            }
    );
}

#[rstest]
fn outcome_serializes_with_state_tag(site: SiteSearch) {
    let json = serde_json::to_value(site.query("docker")).unwrap();
    check!(json["state"] == "found");
    check!(json["results"][0]["type"] == "habilidad");
    check!(json["results"][0]["url"] == "index.html");
}
