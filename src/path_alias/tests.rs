//! Tests for alias resolution - ported from the front-end helper suite.

use super::*;
use crate::error::RockError;

fn resolver_with(entries: &[(&str, &str)]) -> AliasResolver {
    let mut resolver = AliasResolver::new();
    for (alias, path) in entries.iter().copied() {
        resolver.set(alias, Some(path)).unwrap();
    }
    resolver
}

#[test]
fn test_literal_path_passes_through() {
    let resolver = AliasResolver::new();
    assert_eq!(resolver.get("/var/www").unwrap(), "/var/www");
    assert_eq!(resolver.get("relative/path").unwrap(), "relative/path");
    assert_eq!(resolver.get("").unwrap(), "");
}

#[test]
fn test_root_alias_round_trip() {
    let resolver = resolver_with(&[("@app", "/var/www/app")]);
    assert_eq!(resolver.get("@app").unwrap(), "/var/www/app");
}

#[test]
fn test_sigil_is_coerced_on_registration() {
    let resolver = resolver_with(&[("app", "/var/www/app")]);
    assert_eq!(resolver.get("@app").unwrap(), "/var/www/app");
}

#[test]
fn test_literal_path_loses_trailing_separators() {
    let resolver = resolver_with(&[("@web", "/var/www/html///"), ("@win", "C:\\site\\")]);
    assert_eq!(resolver.get("@web").unwrap(), "/var/www/html");
    assert_eq!(resolver.get("@win").unwrap(), "C:\\site");
}

#[test]
fn test_suffix_is_appended_to_flat_root() {
    let resolver = resolver_with(&[("@app", "/var/www/app")]);
    assert_eq!(
        resolver.get("@app/views/site").unwrap(),
        "/var/www/app/views/site"
    );
}

#[test]
fn test_alias_targets_resolve_eagerly() {
    let mut resolver = resolver_with(&[("@a", "/root")]);
    resolver.set("@b", Some("@a/x")).unwrap();
    assert_eq!(resolver.get("@b").unwrap(), "/root/x");

    // Re-pointing the target later must not retroactively move `@b`.
    resolver.set("@a", Some("/other")).unwrap();
    assert_eq!(resolver.get("@b").unwrap(), "/root/x");
}

#[test]
fn test_unresolved_alias_target_fails_registration() {
    let mut resolver = AliasResolver::new();
    let err = resolver.set("@b", Some("@missing/x")).unwrap_err();
    assert!(matches!(err, RockError::InvalidAlias(_)));
    assert!(resolver.is_empty());
    assert!(resolver.get("@b").is_err());
}

#[test]
fn test_chained_alias_with_suffix() {
    let mut resolver = resolver_with(&[("@root", "/srv")]);
    resolver.set("@web", Some("@root/public")).unwrap();
    assert_eq!(resolver.get("@web").unwrap(), "/srv/public");
    assert_eq!(resolver.get("@web/css").unwrap(), "/srv/public/css");
}

#[test]
fn test_nested_alias_under_fresh_root() {
    let resolver = resolver_with(&[("@app/views", "/var/views")]);
    assert_eq!(
        resolver.get("@app/views/index").unwrap(),
        "/var/views/index"
    );
    // The bare root was never registered.
    assert!(resolver.get("@app").is_err());
}

#[test]
fn test_flat_root_is_preserved_when_nesting_arrives() {
    let resolver = resolver_with(&[("@app", "/one"), ("@app/admin", "/two")]);
    assert_eq!(resolver.get("@app/admin/page").unwrap(), "/two/page");
    assert_eq!(resolver.get("@app").unwrap(), "/one");
    assert_eq!(resolver.get("@app/other").unwrap(), "/one/other");
}

#[test]
fn test_longest_prefix_wins() {
    let resolver = resolver_with(&[
        ("@app", "/one"),
        ("@app/admin", "/two"),
        ("@app/admin/users", "/three"),
    ]);
    assert_eq!(resolver.get("@app/admin/users/list").unwrap(), "/three/list");
    assert_eq!(resolver.get("@app/admin/page").unwrap(), "/two/page");
    assert_eq!(resolver.get("@app/index").unwrap(), "/one/index");
}

#[test]
fn test_segment_boundary_prevents_partial_matches() {
    let resolver = resolver_with(&[("@app", "/one"), ("@app/admin", "/two")]);
    // `@app/administrator` shares characters with `@app/admin` but not a
    // whole segment; it must fall back to the shorter match.
    assert_eq!(
        resolver.get("@app/administrator").unwrap(),
        "/one/administrator"
    );
    // A different root is never consulted.
    let resolver = resolver_with(&[("@app", "/one"), ("@app2", "/two")]);
    assert_eq!(resolver.get("@app2/x").unwrap(), "/two/x");
    assert!(resolver.get("@appX").is_err());
}

#[test]
fn test_reregistration_overwrites() {
    let mut resolver = resolver_with(&[("@a", "/one")]);
    resolver.set("@a", Some("/two")).unwrap();
    assert_eq!(resolver.get("@a").unwrap(), "/two");
}

#[test]
fn test_set_none_clears_flat_root() {
    let mut resolver = resolver_with(&[("@a", "/root")]);
    resolver.set("@a", None).unwrap();
    let err = resolver.get("@a").unwrap_err();
    assert_eq!(err, RockError::InvalidAlias("@a".to_string()));
}

#[test]
fn test_set_none_removes_nested_entry_only() {
    let mut resolver = resolver_with(&[("@app", "/one"), ("@app/admin", "/two")]);
    resolver.set("@app/admin", None).unwrap();
    // The sibling survives and now covers the deleted name by prefix.
    assert_eq!(resolver.get("@app").unwrap(), "/one");
    assert_eq!(resolver.get("@app/admin").unwrap(), "/one/admin");
}

#[test]
fn test_set_none_on_missing_alias_is_noop() {
    let mut resolver = AliasResolver::new();
    resolver.set("@ghost", None).unwrap();
    assert!(resolver.is_empty());
}

#[test]
fn test_remove_drops_whole_root() {
    let mut resolver = resolver_with(&[("@app", "/one"), ("@app/admin", "/two")]);
    resolver.remove("@app");
    assert!(resolver.get("@app").is_err());
    assert!(resolver.get("@app/admin").is_err());
    assert!(resolver.is_empty());
}

#[test]
fn test_remove_coerces_sigil() {
    let mut resolver = resolver_with(&[("@app", "/one")]);
    resolver.remove("app");
    assert!(resolver.is_empty());
}
