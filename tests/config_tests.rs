use healthviz::config::Config;

#[test]
fn defaults_point_at_a_local_server() {
    let cfg = Config::default();
    assert_eq!(cfg.host, "localhost");
    assert_eq!(cfg.port, 3306);
    assert_eq!(cfg.user, "root");
    assert_eq!(cfg.password, "");
    assert_eq!(cfg.database, "deaths");
}

#[test]
fn partial_yaml_is_filled_with_defaults() {
    let cfg: Config = serde_yaml::from_str("host: db.example.org\n").unwrap();
    assert_eq!(cfg.host, "db.example.org");
    assert_eq!(cfg.port, 3306);
    assert_eq!(cfg.database, "deaths");
}

#[test]
fn yaml_round_trip_preserves_fields() {
    let mut cfg = Config::default();
    cfg.host = "10.0.0.7".to_string();
    cfg.port = 3307;
    cfg.password = "secret".to_string();

    let yaml = serde_yaml::to_string(&cfg).unwrap();
    let back: Config = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(back.host, "10.0.0.7");
    assert_eq!(back.port, 3307);
    assert_eq!(back.password, "secret");
}

#[test]
fn check_reports_empty_fields() {
    let cfg = Config::default();
    let warnings = cfg.check();
    assert!(warnings.iter().any(|w| w.contains("password is empty")));

    let mut full = Config::default();
    full.password = "secret".to_string();
    assert!(full.check().is_empty());
}
