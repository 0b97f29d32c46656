#[cfg(test)]
mod tests {

    mod slug_tests {
        use crate::services::slug::{generate_slug, validate_slug};

        #[test]
        fn test_generate_slug_basic() {
            assert_eq!(generate_slug("Hello World"), "hello-world");
        }

        #[test]
        fn test_generate_slug_special_characters() {
            assert_eq!(generate_slug("Hello, World!"), "hello-world");
        }

        #[test]
        fn test_generate_slug_unicode() {
            assert_eq!(generate_slug("Café au lait"), "cafe-au-lait");
        }

        #[test]
        fn test_generate_slug_collapses_whitespace() {
            assert_eq!(generate_slug("  Hello   World  "), "hello-world");
        }

        #[test]
        fn test_generate_slug_idempotent_on_unchanged_title() {
            let title = "An Unchanged Title";
            assert_eq!(generate_slug(title), generate_slug(title));
        }

        #[test]
        fn test_validate_slug_valid() {
            assert!(validate_slug("hello-world"));
            assert!(validate_slug("my-post-2024"));
            assert!(validate_slug("a"));
        }

        #[test]
        fn test_validate_slug_invalid() {
            assert!(!validate_slug(""));
            assert!(!validate_slug("Hello-World"));
            assert!(!validate_slug("hello_world"));
            assert!(!validate_slug(&"a".repeat(201)));
        }
    }

    mod scope_tests {
        use crate::models::{ContentScope, ContentType};

        #[test]
        fn test_parse_any_sentinel() {
            assert_eq!("any".parse::<ContentScope>().unwrap(), ContentScope::Any);
            assert_eq!("Any".parse::<ContentScope>().unwrap(), ContentScope::Any);
        }

        #[test]
        fn test_parse_type_scope() {
            assert_eq!(
                "page".parse::<ContentScope>().unwrap(),
                ContentScope::Type(ContentType::Page)
            );
        }

        #[test]
        fn test_parse_unknown_type_fails() {
            assert!("bogus".parse::<ContentScope>().is_err());
            assert!("bogus".parse::<ContentType>().is_err());
        }

        #[test]
        fn test_display_round_trip() {
            for scope in [ContentScope::Any, ContentScope::Type(ContentType::Snippet)] {
                assert_eq!(scope.to_string().parse::<ContentScope>().unwrap(), scope);
            }
        }
    }

    mod settings_tests {
        use crate::models::ContentType;
        use crate::services::settings::SyncSettings;

        #[test]
        fn test_sync_settings_json_round_trip() {
            let settings = SyncSettings {
                post_types: vec![ContentType::Post, ContentType::Page],
            };
            let json = serde_json::to_string(&settings).unwrap();
            assert_eq!(json, r#"{"post_types":["post","page"]}"#);
            let back: SyncSettings = serde_json::from_str(&json).unwrap();
            assert_eq!(back, settings);
        }

        #[test]
        fn test_sync_settings_rejects_unknown_type() {
            let parsed = serde_json::from_str::<SyncSettings>(r#"{"post_types":["widget"]}"#);
            assert!(parsed.is_err());
        }
    }

    mod nonce_tests {
        use crate::web::security::NonceManager;

        const TTL: u64 = 86_400;
        // Aligned to a tick boundary so expiry arithmetic is exact.
        const NOW: i64 = 43_200 * 100;

        fn manager() -> NonceManager {
            NonceManager::new(Some("test-secret".to_string()), TTL)
        }

        #[test]
        fn test_nonce_verifies_for_its_action() {
            let nonce = manager();
            let token = nonce.create_at("rebuild_post_names", NOW);
            assert!(nonce.verify_at(&token, "rebuild_post_names", NOW));
        }

        #[test]
        fn test_nonce_rejects_other_action() {
            let nonce = manager();
            let token = nonce.create_at("rebuild_post_names", NOW);
            assert!(!nonce.verify_at(&token, "delete_everything", NOW));
        }

        #[test]
        fn test_nonce_rejects_garbage_and_empty() {
            let nonce = manager();
            assert!(!nonce.verify_at("0123456789abcdef", "rebuild_post_names", NOW));
            assert!(!nonce.verify_at("", "rebuild_post_names", NOW));
        }

        #[test]
        fn test_nonce_survives_one_tick() {
            let nonce = manager();
            let token = nonce.create_at("rebuild_post_names", NOW);
            assert!(nonce.verify_at(&token, "rebuild_post_names", NOW + (TTL as i64 / 2)));
        }

        #[test]
        fn test_nonce_expires_after_ttl() {
            let nonce = manager();
            let token = nonce.create_at("rebuild_post_names", NOW);
            assert!(!nonce.verify_at(&token, "rebuild_post_names", NOW + TTL as i64));
        }

        #[test]
        fn test_distinct_secrets_mint_distinct_tokens() {
            let a = NonceManager::new(Some("secret-a".to_string()), TTL);
            let b = NonceManager::new(Some("secret-b".to_string()), TTL);
            let token = a.create_at("rebuild_post_names", NOW);
            assert!(!b.verify_at(&token, "rebuild_post_names", NOW));
        }

        #[test]
        fn test_generated_secret_is_unique() {
            assert_ne!(NonceManager::generate_secret(), NonceManager::generate_secret());
        }
    }
}
