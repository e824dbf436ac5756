mod common;

#[cfg(test)]
mod tests {
    use super::common::{store_in, write_raw, ScriptedPrompter};
    use cliclockwork::libs::config::{ConfigStore, TOKEN_KEY};
    use cliclockwork::libs::credentials::{CredentialError, CredentialResolver, Resolution};
    use cliclockwork::libs::messages::Message;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct CredentialTestContext {
        _temp_dir: TempDir,
        store: ConfigStore,
    }

    impl TestContext for CredentialTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let store = store_in(temp_dir.path());
            CredentialTestContext {
                _temp_dir: temp_dir,
                store,
            }
        }
    }

    impl CredentialTestContext {
        fn resolver(&self, answers: &[&str]) -> CredentialResolver<ScriptedPrompter> {
            CredentialResolver::new(self.store.clone(), ScriptedPrompter::new(answers))
        }
    }

    #[test_context(CredentialTestContext)]
    #[test]
    fn test_prompts_and_persists_missing_token(ctx: &mut CredentialTestContext) {
        let resolver = ctx.resolver(&["abc"]);

        let token = resolver.get_token().unwrap();

        assert_eq!(token, "abc");
        assert_eq!(resolver.prompter().asked(), vec![Message::PromptApiToken.to_string()]);
        assert_eq!(ctx.store.load().token(), Some("abc"));
    }

    #[test_context(CredentialTestContext)]
    #[test]
    fn test_stored_token_skips_prompt(ctx: &mut CredentialTestContext) {
        write_raw(&ctx.store, r#"{"token": "stored"}"#);
        let resolver = ctx.resolver(&[]);

        let resolution = resolver.resolve_or_create(TOKEN_KEY, "unused").unwrap();

        assert_eq!(resolution, Resolution::Stored("stored".to_string()));
        assert!(!resolution.was_prompted());
        assert!(resolver.prompter().asked().is_empty());
    }

    #[test_context(CredentialTestContext)]
    #[test]
    fn test_blank_stored_token_is_resolved_again(ctx: &mut CredentialTestContext) {
        write_raw(&ctx.store, r#"{"token": "   ", "timer": "PROJ-1"}"#);
        let resolver = ctx.resolver(&["  fresh  "]);

        let resolution = resolver.resolve_or_create(TOKEN_KEY, "Token?").unwrap();

        assert_eq!(resolution, Resolution::Prompted("fresh".to_string()));
        let record = ctx.store.load();
        assert_eq!(record.token(), Some("fresh"));
        assert_eq!(record.timer(), Some("PROJ-1"));
    }

    #[test_context(CredentialTestContext)]
    #[test]
    fn test_blank_answer_is_rejected_and_not_saved(ctx: &mut CredentialTestContext) {
        let resolver = ctx.resolver(&[""]);

        let err = resolver.get_token().unwrap_err();

        assert_eq!(
            err.downcast_ref::<CredentialError>(),
            Some(&CredentialError::Blank(TOKEN_KEY.to_string()))
        );
        assert!(!ctx.store.path().exists());
    }

    #[test_context(CredentialTestContext)]
    #[test]
    fn test_name_uses_same_pattern(ctx: &mut CredentialTestContext) {
        write_raw(&ctx.store, r#"{"token": "abc"}"#);
        let resolver = ctx.resolver(&["Ada Lovelace"]);

        assert_eq!(resolver.get_token().unwrap(), "abc");
        assert_eq!(resolver.get_name().unwrap(), "Ada Lovelace");
        // Second lookup comes from the file.
        assert_eq!(resolver.get_name().unwrap(), "Ada Lovelace");

        assert_eq!(resolver.prompter().asked(), vec![Message::PromptDisplayName.to_string()]);
        let record = ctx.store.load();
        assert_eq!(record.token(), Some("abc"));
        assert_eq!(record.name(), Some("Ada Lovelace"));
    }
}
