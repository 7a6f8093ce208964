use super::*;

const MIGRATION: &str = include_str!("../migrations/0001_images_bucket.sql");

#[test]
fn images_policy_renders_shipped_migration() {
    assert_eq!(images_bucket().to_sql(), MIGRATION);
}

#[test]
fn images_policy_is_open_to_anonymous_callers() {
    let policy = images_bucket();
    assert!(policy.public);
    for command in [PolicyCommand::Insert, PolicyCommand::Select, PolicyCommand::Update, PolicyCommand::Delete] {
        assert!(policy.allows_anonymous(command), "{command:?} should be public");
    }
    assert!(!policy.is_owner_scoped());
}

#[test]
fn owner_rules_scope_writes_to_uploader() {
    let policy = BucketPolicy {
        bucket: "images".into(),
        public: true,
        rules: vec![
            PolicyRule { command: PolicyCommand::Select, audience: Audience::Public },
            PolicyRule { command: PolicyCommand::Insert, audience: Audience::Owner },
            PolicyRule { command: PolicyCommand::Delete, audience: Audience::Owner },
        ],
    };
    assert!(policy.is_owner_scoped());
    assert!(!policy.allows_anonymous(PolicyCommand::Delete));

    let sql = policy.to_sql();
    assert!(sql.contains("create policy \"Owner delete on images\""));
    assert!(sql.contains("to authenticated\nusing (bucket_id = 'images' and owner = auth.uid());"));
}

#[test]
fn startup_warnings_flag_open_writes_on_shipped_bucket() {
    let warnings = images_bucket().startup_warnings("images");
    assert_eq!(
        warnings,
        ["bucket 'images' is not owner-scoped; anyone holding the anon key can insert, update, delete"]
    );
}

#[test]
fn startup_warnings_name_an_unmigrated_bucket() {
    let warnings = images_bucket().startup_warnings("photos");
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].starts_with("bucket 'photos' is not created by the shipped migration"));
    assert!(!warnings[0].contains("owner-scoped"));
}

#[test]
fn owner_scoped_bucket_has_no_startup_warnings() {
    let policy = BucketPolicy {
        bucket: "images".into(),
        public: true,
        rules: vec![
            PolicyRule { command: PolicyCommand::Select, audience: Audience::Public },
            PolicyRule { command: PolicyCommand::Insert, audience: Audience::Owner },
        ],
    };
    assert!(policy.startup_warnings("images").is_empty());
}
