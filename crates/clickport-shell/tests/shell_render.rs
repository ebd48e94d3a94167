//! Render tests for the shell: route dispatch, persistent chrome and theme
//! application, checked against server-side rendered HTML.

use dioxus::prelude::*;

use clickport_shell::theme::Color;
use clickport_shell::{Location, RouteTable, Shell, ShellConfig, Theme, ThemeMode, ViewId};

#[derive(Props, Clone, PartialEq)]
struct HarnessProps {
    config: ShellConfig,
}

#[allow(non_snake_case)]
fn Harness(props: HarnessProps) -> Element {
    rsx! {
        Shell { config: props.config }
    }
}

fn render(config: ShellConfig) -> String {
    let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { config });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn render_at(path: &str) -> String {
    render(ShellConfig {
        initial_location: Location::parse(path),
        ..ShellConfig::default()
    })
}

fn view_marker(view: ViewId) -> String {
    format!("data-view=\"{}\"", view.slug())
}

fn rendered_views(html: &str) -> Vec<ViewId> {
    ViewId::all()
        .iter()
        .copied()
        .filter(|view| html.contains(&view_marker(*view)))
        .collect()
}

const NAVBAR_MARKER: &str = "data-region=\"navbar\"";

#[test]
fn test_each_route_renders_only_its_view() {
    let routes = RouteTable::standard();
    for route in routes.iter() {
        let html = render_at(&route.path);
        assert_eq!(
            rendered_views(&html),
            vec![route.view],
            "path {} rendered the wrong views",
            route.path
        );
    }
}

#[test]
fn test_unknown_path_renders_no_view() {
    for path in ["/missing", "/join-tables/", "/JOIN-TABLES", "/home"] {
        let html = render_at(path);
        assert!(rendered_views(&html).is_empty(), "{path} rendered a view");
        assert!(html.contains(NAVBAR_MARKER));
    }
}

#[test]
fn test_navbar_present_on_every_route() {
    for route in RouteTable::standard().iter() {
        let html = render_at(&route.path);
        assert_eq!(html.matches(NAVBAR_MARKER).count(), 1);
        for view in ViewId::all() {
            assert!(html.contains(&format!("data-link=\"{}\"", view.slug())));
        }
    }
}

#[test]
fn test_join_tables_scenario() {
    let html = render_at("/join-tables");
    assert!(html.contains(NAVBAR_MARKER));
    assert_eq!(rendered_views(&html), vec![ViewId::JoinTables]);
}

#[test]
fn test_root_scenario() {
    let html = render_at("/");
    assert!(html.contains(NAVBAR_MARKER));
    assert_eq!(rendered_views(&html), vec![ViewId::Home]);
    for tool in [
        ViewId::ClickHouseToFile,
        ViewId::FileToClickHouse,
        ViewId::JoinTables,
    ] {
        assert!(html.contains(&format!("data-tool=\"{}\"", tool.slug())));
    }
}

#[test]
fn test_query_and_hash_do_not_affect_dispatch() {
    let html = render_at("/clickhouse-to-file?table=events#summary");
    assert_eq!(rendered_views(&html), vec![ViewId::ClickHouseToFile]);
}

#[test]
fn test_active_link_follows_location() {
    let html = render_at("/file-to-clickhouse");
    let active = html.matches("data-active=\"true\"").count();
    assert_eq!(active, 1);
}

#[test]
fn test_primary_color_on_distinct_elements() {
    let html = render_at("/");
    let primary = Theme::default().palette.primary.main.to_string();
    // Navbar background, page heading and the tool card buttons
    assert!(html.matches(&primary).count() >= 2);

    let navbar_start = html.find(NAVBAR_MARKER).unwrap();
    let content_start = html.find("data-region=\"content\"").unwrap();
    assert!(html[navbar_start..content_start].contains(&primary));
    assert!(html[content_start..].contains(&primary));
}

#[test]
fn test_rendering_is_idempotent() {
    for route in RouteTable::standard().iter() {
        assert_eq!(render_at(&route.path), render_at(&route.path));
    }
}

#[test]
fn test_custom_theme_is_applied() {
    let theme = Theme::new(
        ThemeMode::Dark,
        Color::rgb(0x2e, 0x7d, 0x32),
        Color::rgb(0xff, 0x98, 0x00),
    );
    let html = render(ShellConfig {
        theme,
        ..ShellConfig::default()
    });
    assert!(html.contains("#2e7d32"));
    assert!(!html.contains("#1976d2"));
    assert!(html.contains("color-scheme: dark"));
    assert!(html.contains("#121212"));
}

#[test]
fn test_baseline_styles_rendered_once() {
    let html = render_at("/join-tables");
    assert_eq!(html.matches("<style").count(), 1);
    assert!(html.contains("box-sizing: inherit"));
}

#[test]
fn test_tool_forms_start_invalid() {
    // Empty required fields: the summary lists problems instead of a statement
    for path in ["/clickhouse-to-file", "/file-to-clickhouse", "/join-tables"] {
        let html = render_at(path);
        assert!(html.contains("data-summary=\"invalid\""), "{path}");
        assert!(!html.contains("FORMAT TabSeparated"), "{path}");
    }
}

#[test]
fn test_custom_route_table() {
    let routes = RouteTable::new().with_route("/start", ViewId::JoinTables);
    let html = render(ShellConfig {
        routes,
        initial_location: Location::parse("/start"),
        ..ShellConfig::default()
    });
    assert_eq!(rendered_views(&html), vec![ViewId::JoinTables]);
    assert!(!html.contains("data-link=\"home\""));
}
