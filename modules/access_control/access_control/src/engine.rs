//! Access decision engine.
//!
//! A decision walks the precedence table top to bottom; the first row whose
//! condition holds decides the outcome. When no row matches, the caller is
//! denied for lacking a required role.

use std::fmt;

use access_control_sdk::{AccessDecision, AccessDenied, AllowedRoleSet, DenialKind, Grant, Role};
use things_security::CallerContext;

/// Rows of the precedence table, in evaluation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrecedenceRule {
    AnyWildcard,
    NoneWildcard,
    ApplicationAdministrator,
    ResourceOwner,
}

impl PrecedenceRule {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AnyWildcard => "any_wildcard",
            Self::NoneWildcard => "none_wildcard",
            Self::ApplicationAdministrator => "application_administrator",
            Self::ResourceOwner => "resource_owner",
        }
    }
}

impl fmt::Display for PrecedenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy)]
enum Outcome {
    Allow(Grant),
    Disabled,
}

/// Inputs visible to a precedence condition.
struct Subject<'a> {
    caller: &'a CallerContext,
    resource_owner: Option<&'a str>,
}

struct Row {
    rule: PrecedenceRule,
    applies: fn(&AllowedRoleSet, &Subject<'_>) -> bool,
    outcome: Outcome,
}

static PRECEDENCE: [Row; 4] = [
    Row {
        rule: PrecedenceRule::AnyWildcard,
        applies: any_wildcard,
        outcome: Outcome::Allow(Grant::AnyRole),
    },
    Row {
        rule: PrecedenceRule::NoneWildcard,
        applies: none_wildcard,
        outcome: Outcome::Disabled,
    },
    Row {
        rule: PrecedenceRule::ApplicationAdministrator,
        applies: privileged_administrator,
        outcome: Outcome::Allow(Grant::ApplicationAdministrator),
    },
    Row {
        rule: PrecedenceRule::ResourceOwner,
        applies: resource_owner,
        outcome: Outcome::Allow(Grant::ResourceOwner),
    },
];

fn any_wildcard(roles: &AllowedRoleSet, _: &Subject<'_>) -> bool {
    roles.contains(Role::Any)
}

fn none_wildcard(roles: &AllowedRoleSet, _: &Subject<'_>) -> bool {
    roles.contains(Role::None)
}

fn privileged_administrator(roles: &AllowedRoleSet, subject: &Subject<'_>) -> bool {
    roles.contains(Role::ApplicationAdministrator)
        && subject.caller.is_authenticated()
        && subject.caller.is_privileged()
}

fn resource_owner(roles: &AllowedRoleSet, subject: &Subject<'_>) -> bool {
    roles.contains(Role::SelfOwner)
        && subject
            .caller
            .subject_id()
            .zip(subject.resource_owner)
            .is_some_and(|(caller_id, owner_id)| caller_id == owner_id)
}

/// The precedence order the engine applies.
pub fn precedence() -> impl Iterator<Item = PrecedenceRule> {
    PRECEDENCE.iter().map(|row| row.rule)
}

/// Decide whether `caller` may invoke an operation configured with `roles`.
///
/// `self` never grants here because no resource owner is known; use
/// [`decide_for_owner`] on resource-scoped operations.
#[must_use]
pub fn decide(roles: &AllowedRoleSet, caller: &CallerContext) -> AccessDecision {
    evaluate(
        roles,
        &Subject {
            caller,
            resource_owner: None,
        },
    )
}

/// Like [`decide`], additionally granting `self` when the caller owns the
/// resource identified by `owner_id`.
#[must_use]
pub fn decide_for_owner(
    roles: &AllowedRoleSet,
    caller: &CallerContext,
    owner_id: &str,
) -> AccessDecision {
    evaluate(
        roles,
        &Subject {
            caller,
            resource_owner: Some(owner_id),
        },
    )
}

fn evaluate(roles: &AllowedRoleSet, subject: &Subject<'_>) -> AccessDecision {
    let caller = subject.caller.label();

    for row in &PRECEDENCE {
        if !(row.applies)(roles, subject) {
            continue;
        }
        return match row.outcome {
            Outcome::Allow(grant) => {
                tracing::debug!(rule = %row.rule, caller, "access allowed");
                AccessDecision::Allow(grant)
            }
            Outcome::Disabled => {
                tracing::debug!(rule = %row.rule, caller, "access denied, operation disabled");
                AccessDecision::Deny(AccessDenied::new(
                    DenialKind::OperationDisabled,
                    format!("operation is disabled; {caller} may not invoke it"),
                ))
            }
        };
    }

    let reason = format!("{caller} is not a superuser; operation requires one of {roles}");
    tracing::debug!(rule = "missing_role", caller, %reason, "access denied");
    AccessDecision::Deny(AccessDenied::new(DenialKind::MissingRole, reason))
}
