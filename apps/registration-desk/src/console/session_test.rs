#[cfg(test)]
mod tests {
    use super::super::*;
    use registration::infra::storage::db;
    use registration::{DatabaseConfig, SeaOrmRegistrationRepository, Status};
    use std::path::Path;
    use std::sync::Arc;

    async fn controller() -> FormController<SeaOrmRegistrationRepository> {
        let cfg = DatabaseConfig {
            in_memory: true,
            ..DatabaseConfig::default()
        };
        let conn = db::connect(&cfg, Path::new(".")).await.unwrap();
        let repo = SeaOrmRegistrationRepository::new(conn);
        repo.init().await.unwrap();
        FormController::new(Arc::new(repo))
    }

    async fn session(script: &str) -> (FormController<SeaOrmRegistrationRepository>, String) {
        colored::control::set_override(false);
        let mut controller = controller().await;
        let mut out = Vec::new();
        run_session(&mut controller, script.as_bytes(), &mut out)
            .await
            .unwrap();
        (controller, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn initial_screen_shows_defaults() {
        let (_, out) = session("").await;
        assert!(out.contains("Registration form"));
        assert!(out.contains("Phone number: +7"));
        assert!(out.contains("clear (disabled)"));
    }

    #[tokio::test]
    async fn full_registration() {
        let script = "s ivanov\nn ivan\np 9991234567\nshop 2\nsubmit\n";
        let (controller, out) = session(script).await;

        assert!(out.contains("Surname:      Ivanov"));
        assert!(out.contains("Shop:         Shop2"));
        assert!(out.contains("Registration completed successfully!"));
        assert!(out.contains("Type 'back'"));
        assert_eq!(controller.status(), &Status::Registered { id: 1 });
    }

    #[tokio::test]
    async fn rejected_submit_prints_every_error() {
        let (controller, out) = session("surname Ivanov\nsubmit\n").await;

        assert!(out.contains("Invalid first name"));
        assert!(out.contains("Invalid phone number"));
        assert!(out.contains("Shop is not selected"));
        assert!(!out.contains("Invalid surname"));
        assert_eq!(controller.view(), ViewState::Form);
    }

    #[tokio::test]
    async fn clear_is_refused_while_disabled() {
        let (_, out) = session("clear\n").await;
        assert!(out.contains(NOTHING_TO_CLEAR));
    }

    #[tokio::test]
    async fn success_screen_hides_the_form() {
        let script = "s ivanov\nn ivan\np 9991234567\nshop 1\nsubmit\ns petrov\nclear\nsubmit\n";
        let (controller, out) = session(script).await;

        assert_eq!(out.matches(FORM_HIDDEN).count(), 3);
        assert_eq!(controller.draft().surname(), "Ivanov");
    }

    #[tokio::test]
    async fn back_then_submit_stores_again() {
        let script = "s ivanov\nn ivan\np 9991234567\nshop 1\nsubmit\nback\nsubmit\n";
        let (controller, out) = session(script).await;

        assert_eq!(out.matches("Registration completed successfully!").count(), 2);
        assert_eq!(controller.status(), &Status::Registered { id: 2 });
    }

    #[tokio::test]
    async fn quit_stops_reading() {
        let (controller, out) = session("quit\nsurname Ivanov\n").await;
        assert_eq!(controller.draft().surname(), "");
        assert!(!out.contains("Ivanov"));
    }

    #[tokio::test]
    async fn unknown_command_keeps_going() {
        let (controller, out) = session("frobnicate\nsurname Ivanov\n").await;
        assert!(out.contains("unknown command 'frobnicate'"));
        assert_eq!(controller.draft().surname(), "Ivanov");
    }

    #[tokio::test]
    async fn shops_and_help_are_listed() {
        let (_, out) = session("shops\nhelp\n").await;
        assert!(out.contains(" 1. Shop1"));
        assert!(out.contains("11. Shop11"));
        assert!(out.contains("quit|exit"));
    }

    #[tokio::test]
    async fn register_once_reports_validation_errors() {
        let mut controller = controller().await;
        let input = RegisterInput {
            surname: "Ivanov".to_owned(),
            first_name: "Ivan".to_owned(),
            phone: "999".to_owned(),
            shop: Some(Shop::Shop3),
        };

        let err = register_once(&mut controller, &input).await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid phone number");

        let ok = RegisterInput {
            phone: "+79991234567".to_owned(),
            ..input
        };
        let registration = register_once(&mut controller, &ok).await.unwrap();
        assert_eq!(registration.id(), 1);
        assert_eq!(registration.record().shop(), Shop::Shop3);
    }
}
