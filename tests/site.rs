use shader_showcase::device::{DeviceInfo, Presentation};
use shader_showcase::footer::{FooterConfig, FooterItem, NetworkSecurityRegistration};
use shader_showcase::motion::{track_transform, CubicBezier};
use shader_showcase::{MobileConfig, ShowcaseConfig, ShowcaseError, Transition};

fn primary_only() -> FooterConfig {
    FooterConfig {
        enabled: true,
        registration_number: "黔ICP备2026001073号-1".into(),
        registration_url: "https://beian.miit.gov.cn".into(),
        network_security_registration: None,
    }
}

#[test]
fn disabled_footer_renders_nothing() {
    let footer = FooterConfig {
        enabled: false,
        ..primary_only()
    };
    assert!(footer.items().is_empty());
}

#[test]
fn primary_registration_renders_one_link() {
    let items = primary_only().items();
    assert_eq!(
        items,
        vec![FooterItem::Registration {
            text: "ICP备案号: 黔ICP备2026001073号-1".into(),
            href: "https://beian.miit.gov.cn".into(),
        }]
    );
}

#[test]
fn secondary_registration_comes_first() {
    let footer = FooterConfig {
        network_security_registration: Some(NetworkSecurityRegistration {
            number: "公网安备 52000000000001号".into(),
            url: "https://beian.mps.gov.cn".into(),
            icon_path: "/beian.png".into(),
        }),
        ..primary_only()
    };
    let items = footer.items();
    assert_eq!(items.len(), 2);
    assert!(matches!(
        &items[0],
        FooterItem::NetworkSecurity { icon, .. } if icon == "/beian.png"
    ));
    assert_eq!(items[0].href(), "https://beian.mps.gov.cn");
    assert!(matches!(items[1], FooterItem::Registration { .. }));
    assert!(items[1].text().starts_with("ICP备案号: "));
}

#[test]
fn embedded_config_is_valid() {
    let config = ShowcaseConfig::embedded().expect("embedded config parses");
    assert_eq!(config.carousel.window_radius, 1);
    assert_eq!(config.carousel.transition_ms, 800);
    assert_eq!(config.carousel.wheel_debounce_ms, 50);
    assert!(config.footer.enabled);
    config.validate(6).expect("valid for six pages");
}

#[test]
fn missing_config_fields_take_defaults() {
    let config = ShowcaseConfig::from_json(r#"{"footer":{"enabled":false}}"#).unwrap();
    assert_eq!(config.carousel.touch_threshold_px, 50.0);
    assert!(config.mobile.single_page);
    assert_eq!(config.mobile.page, 2);
    assert!(!config.footer.enabled);
    assert!(config.footer.network_security_registration.is_none());
}

#[test]
fn config_reads_camel_case_registration() {
    let json = r#"{
        "footer": {
            "enabled": true,
            "registrationNumber": "A-1",
            "registrationUrl": "https://example.cn",
            "networkSecurityRegistration": {
                "number": "B-2",
                "url": "https://example.cn/b",
                "iconPath": "/icon.png"
            }
        }
    }"#;
    let config = ShowcaseConfig::from_json(json).unwrap();
    let items = config.footer.items();
    assert_eq!(items[0].text(), "B-2");
    assert_eq!(items[1].text(), "ICP备案号: A-1");
}

#[test]
fn invalid_configs_are_rejected() {
    assert!(matches!(
        ShowcaseConfig::from_json("{not json"),
        Err(ShowcaseError::Config(_))
    ));

    let mut config = ShowcaseConfig::default();
    assert!(config.validate(6).is_ok());
    assert!(matches!(
        config.validate(2),
        Err(ShowcaseError::InvalidConfig(_))
    ));

    config.carousel.transition_ms = 0;
    assert!(config.validate(6).is_err());

    let mut config = ShowcaseConfig::default();
    config.carousel.touch_threshold_px = f64::NAN;
    assert!(config.validate(6).is_err());
}

#[test]
fn mobile_detection() {
    let desktop = DeviceInfo {
        user_agent: "Mozilla/5.0 (X11; Linux x86_64) Firefox/130.0".into(),
        inner_width: 1920.0,
        has_touch: false,
    };
    assert!(!desktop.is_mobile());

    let phone = DeviceInfo {
        user_agent: "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)".into(),
        ..desktop.clone()
    };
    assert!(phone.is_mobile());

    let small_touch = DeviceInfo {
        inner_width: 768.0,
        has_touch: true,
        ..desktop.clone()
    };
    assert!(small_touch.is_mobile());

    let small_no_touch = DeviceInfo {
        inner_width: 500.0,
        ..desktop
    };
    assert!(!small_no_touch.is_mobile());
}

#[test]
fn presentation_follows_device_and_config() {
    let mobile = MobileConfig::default();
    assert_eq!(
        Presentation::choose(true, &mobile),
        Presentation::Single { page: 2 }
    );
    assert_eq!(Presentation::choose(false, &mobile), Presentation::Carousel);

    let full_site = MobileConfig {
        single_page: false,
        ..mobile
    };
    assert_eq!(Presentation::choose(true, &full_site), Presentation::Carousel);
}

#[test]
fn track_motion_css() {
    assert_eq!(track_transform(0), "translateY(-0vh)");
    assert_eq!(track_transform(3), "translateY(-300vh)");
    assert_eq!(
        Transition::default().to_css(),
        "transform 0.8s cubic-bezier(0.645, 0.045, 0.355, 1)"
    );
    assert_eq!(Transition::new(800).easing, CubicBezier::EASE_IN_OUT);
}
