use http::Method;
use route_helpers::{
    load_routes, sanitize, ApiVersions, CallOptions, DecoratedRoute, HelperError, RouteDescriptor,
};
use serde_json::json;

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn decorated(name: &str) -> Vec<DecoratedRoute> {
    load_routes(fixture(name))
        .unwrap()
        .into_iter()
        .map(|descriptor| DecoratedRoute::new(descriptor).unwrap())
        .collect()
}

fn find<'a>(routes: &'a [DecoratedRoute], pred: impl Fn(&DecoratedRoute) -> bool) -> &'a DecoratedRoute {
    routes.iter().find(|route| pred(route)).expect("route in fixture")
}

fn index_route(routes: &[DecoratedRoute]) -> &DecoratedRoute {
    find(routes, |r| r.namespace() == Some("/cats"))
}

fn show_route(routes: &[DecoratedRoute]) -> &DecoratedRoute {
    find(routes, |r| r.namespace() == Some("/cats/:id"))
}

#[test]
fn test_sanitize_replaces_illegal_characters() {
    let sanitized: Vec<String> = ["beta-1", "name_with_+", "name_with_("]
        .iter()
        .map(|name| sanitize(name))
        .collect();
    assert_eq!(sanitized, vec!["beta_1", "name_with__", "name_with__"]);
}

#[test]
fn test_sanitize_only_replaces_leading_digit() {
    assert_eq!(sanitize("1"), "_");
    assert_eq!(sanitize("v1"), "v1");
}

#[test]
fn test_custom_name_replaces_generated_name() {
    let routes = decorated("routes.yaml");
    let custom = find(&routes, |r| r.path_template().contains("custom_name"));
    assert_eq!(custom.helper_names(), ["my_custom_route_name_path"]);
    assert_eq!(
        custom
            .call("my_custom_route_name_path", &CallOptions::new())
            .unwrap(),
        "/api/v1/custom_name.json"
    );
}

#[test]
fn test_multiple_post_routes_each_get_a_helper() {
    let routes = decorated("multiple_posts.json");
    assert_eq!(routes.len(), 2);
    assert!(routes.iter().all(|r| *r.method() == Method::POST));
    assert!(routes.iter().all(|r| r.helper_names().len() == 1));
}

#[test]
fn test_one_helper_name_per_version() {
    let routes = decorated("multiple_versions.yaml");
    let ping = find(&routes, |r| r.path_template().contains("ping"));
    assert_eq!(
        ping.helper_names(),
        ["alpha_ping_path", "beta_ping_path", "v1_ping_path"]
    );
    assert_eq!(ping.helpers().len(), 3);
}

#[test]
fn test_single_version_helper_name() {
    let routes = decorated("routes.yaml");
    assert_eq!(show_route(&routes).helper_names(), ["api_v1_cats_path"]);
    assert_eq!(index_route(&routes).path_helper_name(), "api_v1_cats_path");
}

#[test]
fn test_helper_arguments() {
    let routes = decorated("routes.yaml");
    assert!(index_route(&routes).helper_arguments().is_empty());
    assert_eq!(show_route(&routes).helper_arguments(), ["id"]);
}

#[test]
fn test_path_segments_with_values_accepts_symbol_and_string_keys() {
    let routes = decorated("routes.yaml");
    let show = show_route(&routes);

    let symbolic = show.path_segments_with_values(&CallOptions::new().with(":id", 1));
    assert!(symbolic.contains(&json!(1)));

    let plain = show.path_segments_with_values(&CallOptions::new().with("id", 1));
    assert!(plain.contains(&json!(1)));
}

#[test]
fn test_root_path_helper_name() {
    let root = DecoratedRoute::new(RouteDescriptor::new(Method::GET, "/")).unwrap();
    assert_eq!(root.path_helper_name(), "root_path");
    assert_eq!(root.helpers()[0].path().unwrap(), "/.json");
}

#[test]
fn test_catch_all_name_drops_glob_star() {
    let routes = decorated("routes.yaml");
    let catch_all = find(&routes, |r| r.path_template().contains('*'));
    assert_eq!(catch_all.path_helper_name(), "api_v1_path_path");
    assert_eq!(
        catch_all.call("api_v1_path_path", &CallOptions::new()).unwrap(),
        "/api/v1"
    );
}

#[test]
fn test_segment_to_value() {
    let routes = decorated("routes.yaml");
    let index = index_route(&routes);
    assert_eq!(index.segment_to_value(":version", None), json!("v1"));
    assert_eq!(index.segment_to_value("api", None), json!("api"));

    let show = show_route(&routes);
    let options = CallOptions::new().with("id", 1);
    assert_eq!(show.segment_to_value(":id", Some(&options)), json!(1));
}

#[test]
fn test_params_mapping_becomes_query_string() {
    let routes = decorated("routes.yaml");
    let options = CallOptions::new().params(json!({"foo": "bar", "baz": "zot"}));
    assert_eq!(
        index_route(&routes)
            .call("api_v1_cats_path", &options)
            .unwrap(),
        "/api/v1/cats.json?foo=bar&baz=zot"
    );
}

#[test]
fn test_scalar_params_are_appended_as_is() {
    let routes = decorated("routes.yaml");
    let options = CallOptions::new().params(1);
    assert_eq!(
        index_route(&routes)
            .call("api_v1_cats_path", &options)
            .unwrap(),
        "/api/v1/cats.json?1"
    );
}

#[test]
fn test_helper_without_arguments() {
    let routes = decorated("routes.yaml");
    assert_eq!(
        index_route(&routes)
            .call("api_v1_cats_path", &CallOptions::new())
            .unwrap(),
        "/api/v1/cats.json"
    );
}

#[test]
fn test_helper_with_arguments() {
    let routes = decorated("routes.yaml");
    let show = show_route(&routes);
    assert_eq!(
        show.call("api_v1_cats_path", &CallOptions::new().with("id", 1))
            .unwrap(),
        "/api/v1/cats/1.json"
    );

    let err = show
        .call("api_v1_cats_path", &CallOptions::new())
        .unwrap_err();
    assert_eq!(
        err,
        HelperError::MissingArgument {
            helper: "api_v1_cats_path".to_string(),
            segment: "id".to_string(),
        }
    );
}

#[test]
fn test_path_for_each_version() {
    let routes = decorated("multiple_versions.yaml");
    let ping = &routes[0];
    let none = CallOptions::new();
    assert_eq!(ping.call("alpha_ping_path", &none).unwrap(), "/alpha/ping");
    assert_eq!(ping.call("beta_ping_path", &none).unwrap(), "/beta/ping");
    assert_eq!(ping.call("v1_ping_path", &none).unwrap(), "/v1/ping");
}

#[test]
fn test_explicit_format_replaces_extension() {
    let routes = decorated("routes.yaml");
    let show = show_route(&routes);
    let dotted = CallOptions::new().with("id", 1).format(".xml");
    let bare = CallOptions::new().with("id", 1).format("xml");
    assert_eq!(show.call("api_v1_cats_path", &dotted).unwrap(), "/api/v1/cats/1.xml");
    assert_eq!(show.call("api_v1_cats_path", &bare).unwrap(), "/api/v1/cats/1.xml");
}

#[test]
fn test_stringified_version_list() {
    let route = DecoratedRoute::new(
        RouteDescriptor::new(Method::GET, "/:version/ping")
            .with_versions(ApiVersions::parse(r#"["alpha", "beta"]"#)),
    )
    .unwrap();
    assert_eq!(route.helper_names(), ["alpha_ping_path", "beta_ping_path"]);
}
