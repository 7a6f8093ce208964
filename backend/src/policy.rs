//! Declared storage bucket policy.
//!
//! The bucket and its row-level policies are created once by the migration in
//! `backend/migrations/`. This module is the typed source of that migration so
//! the host can inspect what the deployed policy allows.
//!
//! The shipped `images` policy grants insert, select, update and delete to
//! everyone, signed in or not. Nothing ties an object to its uploader.
//! [`BucketPolicy::is_owner_scoped`] reports that gap instead of hiding it.

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;

use std::fmt::Write as _;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolicyCommand {
    Insert,
    Select,
    Update,
    Delete,
}

impl PolicyCommand {
    fn sql(self) -> &'static str {
        match self {
            Self::Insert => "insert",
            Self::Select => "select",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// Who a rule applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Audience {
    /// Any caller, including anonymous ones.
    Public,
    /// Signed-in callers acting on objects they own.
    Owner,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolicyRule {
    pub command: PolicyCommand,
    pub audience: Audience,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BucketPolicy {
    pub bucket: String,
    /// Objects readable through the unauthenticated public URL.
    pub public: bool,
    pub rules: Vec<PolicyRule>,
}

/// The `images` bucket as deployed: public, every command open to everyone.
#[must_use]
pub fn images_bucket() -> BucketPolicy {
    BucketPolicy {
        bucket: "images".into(),
        public: true,
        rules: [PolicyCommand::Insert, PolicyCommand::Select, PolicyCommand::Update, PolicyCommand::Delete]
            .into_iter()
            .map(|command| PolicyRule { command, audience: Audience::Public })
            .collect(),
    }
}

impl BucketPolicy {
    /// Whether `command` is allowed for a caller with no session.
    #[must_use]
    pub fn allows_anonymous(&self, command: PolicyCommand) -> bool {
        self.rules
            .iter()
            .any(|r| r.command == command && r.audience == Audience::Public)
    }

    /// Whether every write (insert, update, delete) is limited to the owner.
    #[must_use]
    pub fn is_owner_scoped(&self) -> bool {
        self.rules
            .iter()
            .filter(|r| r.command != PolicyCommand::Select)
            .all(|r| r.audience == Audience::Owner)
    }

    /// Problems worth logging at startup when the app is configured to use
    /// `configured_bucket`. This policy only describes the bucket it names.
    #[must_use]
    pub fn startup_warnings(&self, configured_bucket: &str) -> Vec<String> {
        if configured_bucket != self.bucket {
            return vec![format!(
                "bucket '{configured_bucket}' is not created by the shipped migration (which covers '{}'); its access policy is unknown",
                self.bucket
            )];
        }
        let mut warnings = Vec::new();
        if !self.is_owner_scoped() {
            let open: Vec<&str> = [PolicyCommand::Insert, PolicyCommand::Update, PolicyCommand::Delete]
                .into_iter()
                .filter(|command| self.allows_anonymous(*command))
                .map(PolicyCommand::sql)
                .collect();
            warnings.push(format!(
                "bucket '{}' is not owner-scoped; anyone holding the anon key can {}",
                self.bucket,
                open.join(", ")
            ));
        }
        warnings
    }

    /// Render the SQL migration that creates the bucket and its policies.
    #[must_use]
    pub fn to_sql(&self) -> String {
        let mut blocks = vec![format!(
            "insert into storage.buckets (id, name, public)\nvalues ('{b}', '{b}', {public})\non conflict (id) do nothing;",
            b = self.bucket,
            public = self.public
        )];
        blocks.extend(self.rules.iter().map(|rule| self.rule_sql(rule)));
        let mut sql = blocks.join("\n\n");
        sql.push('\n');
        sql
    }

    fn rule_sql(&self, rule: &PolicyRule) -> String {
        let (label, role, predicate) = match rule.audience {
            Audience::Public => ("Public", "public", format!("bucket_id = '{}'", self.bucket)),
            Audience::Owner => (
                "Owner",
                "authenticated",
                format!("bucket_id = '{}' and owner = auth.uid()", self.bucket),
            ),
        };
        let command = rule.command.sql();
        let mut sql = format!(
            "create policy \"{label} {command} on {bucket}\"\non storage.objects for {command}\nto {role}",
            bucket = self.bucket
        );
        match rule.command {
            PolicyCommand::Insert => {
                let _ = write!(sql, "\nwith check ({predicate});");
            }
            PolicyCommand::Select | PolicyCommand::Delete => {
                let _ = write!(sql, "\nusing ({predicate});");
            }
            PolicyCommand::Update => {
                let _ = write!(sql, "\nusing ({predicate})\nwith check ({predicate});");
            }
        }
        sql
    }
}
