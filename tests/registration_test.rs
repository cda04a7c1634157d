//! End-to-end registration scenarios: one registrar instance, many
//! registrations, explicit registries standing in for the host framework.

use std::sync::Arc;

use impressionist_core::config::ImpressionistManifest;
use impressionist_core::minion::{
    ActionId, HookTiming, MinionOptions, MinionRegistrar, RegistrationRequest, UniqueSetting,
    Uniqueness,
};
use impressionist_core::registry::{EntityRegistry, EntityType, MinionRegistry};
use impressionist_core::{ImpressionistError, DEFAULT_CACHE_CLASS};

fn host_setup() -> (MinionRegistrar, Arc<MinionRegistry>) {
    let entities = Arc::new(EntityRegistry::with_default_cache());
    entities.register_all([
        EntityType::controller("PostsController"),
        EntityType::controller("ArticlesController"),
        EntityType::model("Post"),
        EntityType::model("Article"),
    ]);

    let minions = Arc::new(MinionRegistry::new());
    let registrar = MinionRegistrar::new(entities, minions.clone());
    (registrar, minions)
}

#[test]
fn explicit_actions_with_class_name_override() {
    let (registrar, minions) = host_setup();

    let options = MinionOptions {
        class_name: Some("Article".to_string()),
        ..Default::default()
    };
    let config = registrar
        .register_with("posts", &[ActionId::from("index"), ActionId::from("show")], options)
        .unwrap();

    let expected: Vec<&str> = vec!["index", "show"];
    let resolved: Vec<&str> = config.actions.iter().map(ActionId::as_str).collect();
    assert_eq!(resolved, expected);

    // class_name wins over the derived `Post`.
    assert_eq!(config.target_model.as_ref().unwrap().name, "Article");
    assert_eq!(config.hook_timing, HookTiming::Before);
    assert_eq!(config.counter_column, "impressions_total");
    assert_eq!(config.uniqueness, Uniqueness::Disabled);

    assert!(minions.config_for("PostsController").is_some());
}

#[test]
fn wildcard_unions_defaults_with_explicit_actions() {
    let (registrar, _) = host_setup();

    let request = RegistrationRequest::new("posts")
        .with_actions([ActionId::wildcard(), ActionId::from("archive")]);
    let config = registrar.register(request).unwrap();

    assert_eq!(config.actions.len(), 8);
    for action in ["archive", "index", "show", "edit", "new", "create", "update", "delete"] {
        assert!(config.tracks_action(&ActionId::from(action)), "missing {action}");
    }
    assert!(!config.tracks_action(&ActionId::wildcard()));
}

#[test]
fn unresolvable_target_does_not_poison_the_registrar() {
    let (registrar, minions) = host_setup();

    let err = registrar
        .register(RegistrationRequest::new("widgets"))
        .unwrap_err();
    assert_eq!(
        err,
        ImpressionistError::unresolvable_target("widgets", "WidgetsController")
    );
    assert!(minions.config_for("WidgetsController").is_none());

    // A subsequent, unrelated registration succeeds normally.
    let config = registrar.register(RegistrationRequest::new("posts")).unwrap();
    assert_eq!(config.actions.len(), 7);
    assert!(minions.config_for("PostsController").is_some());
}

#[test]
fn attached_config_is_absent_before_registration() {
    let (registrar, minions) = host_setup();

    assert!(minions.config_for("PostsController").is_none());
    registrar.register(RegistrationRequest::new("posts")).unwrap();
    assert!(minions.config_for("PostsController").is_some());
    assert_eq!(minions.stats().total_minions, 1);
}

#[test]
fn repeat_registration_replaces_the_installed_minion() {
    let (registrar, minions) = host_setup();

    registrar.register(RegistrationRequest::new("posts")).unwrap();
    let options = MinionOptions {
        hook: Some(HookTiming::After),
        ..Default::default()
    };
    registrar
        .register_with("posts", &[ActionId::from("show")], options)
        .unwrap();

    assert_eq!(minions.stats().total_minions, 1);
    let installed = minions.get("PostsController").unwrap();
    assert_eq!(installed.timing, HookTiming::After);
    assert_eq!(installed.config.actions.len(), 1);
}

#[test]
fn uniqueness_and_cache_resolution_through_the_pipeline() {
    let (registrar, _) = host_setup();

    let options = MinionOptions {
        unique: Some(UniqueSetting::Dimension("session_id".to_string())),
        counter_cache: Some(true),
        ..Default::default()
    };
    let config = registrar.register_with("articles", &[], options).unwrap();

    assert_eq!(config.uniqueness, Uniqueness::By("session_id".to_string()));
    assert!(config.counter_cache_enabled);
    assert_eq!(config.target_model.as_ref().unwrap().name, "Article");
    assert_eq!(config.cache_target.as_ref().unwrap().name, DEFAULT_CACHE_CLASS);
}

#[test]
fn manifest_applies_declaratively_and_skips_unresolvable_targets() {
    let (registrar, minions) = host_setup();

    let manifest = ImpressionistManifest::from_yaml(
        r#"
minions:
  - name: posts
    actions: [index, show]
    unique: true
  - name: widgets
  - name: articles
    hook: around
    column_name: views_total
"#,
    )
    .unwrap();

    let report = manifest.apply(&registrar);
    assert_eq!(report.registered, vec!["posts".to_string(), "articles".to_string()]);
    assert_eq!(report.skipped, vec!["widgets".to_string()]);

    let posts = minions.config_for("PostsController").unwrap();
    assert_eq!(posts.uniqueness, Uniqueness::By("ip_address".to_string()));

    let articles = minions.config_for("ArticlesController").unwrap();
    assert_eq!(articles.hook_timing, HookTiming::Around);
    assert_eq!(articles.counter_column, "views_total");
}
