//! Member edit workflow - the add/edit modal state machine
//!
//! Orchestrates one editing session: open a form for an existing member (or
//! a blank one for the add flow), track the live draft, and chain through
//! the publish and discard confirmation dialogs. Publishing always passes
//! through its confirmation; closing asks only when the draft actually
//! differs from the snapshot taken at open time (structural comparison, so
//! new draft fields participate automatically).
//!
//! The machine never persists anything itself: committing transitions hand
//! a [`WorkflowEffect`] back to the caller, which runs the service call and
//! upserts the store.

use rosterly_domain::{CategoryId, Member, MemberId};

use crate::application::dto::MemberDraft;

/// Where the editing session currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditStage {
    #[default]
    Closed,
    Editing,
    ConfirmingPublish,
    ConfirmingDiscard,
}

/// What the caller must do after a transition
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowEffect {
    /// Nothing to persist
    None,
    /// Upsert with `status = Draft`; `member_id` is `None` for the add flow
    CommitDraft {
        member_id: Option<MemberId>,
        draft: MemberDraft,
    },
    /// Upsert with `status = Published`
    CommitPublish {
        member_id: Option<MemberId>,
        draft: MemberDraft,
    },
}

/// One editing session over a single member
#[derive(Debug, Clone, Default)]
pub struct EditWorkflow {
    stage: EditStage,
    /// The member being edited; `None` for the add flow (no backing id yet)
    open_member: Option<Member>,
    /// Snapshot taken at open time, for the dirty comparison
    snapshot: Option<MemberDraft>,
    /// Live (possibly dirty) form content
    draft: Option<MemberDraft>,
}

impl EditWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn stage(&self) -> EditStage {
        self.stage
    }

    pub fn open_member(&self) -> Option<&Member> {
        self.open_member.as_ref()
    }

    /// Id of the member under edit; `None` until the backend assigns one.
    pub fn member_id(&self) -> Option<MemberId> {
        self.open_member.as_ref().map(|m| m.id)
    }

    pub fn draft(&self) -> Option<&MemberDraft> {
        self.draft.as_ref()
    }

    /// The draft differs from the open-time snapshot.
    pub fn is_dirty(&self) -> bool {
        self.draft != self.snapshot
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// `Closed -> Editing` for an existing member.
    pub fn open_for_edit(&mut self, member: Member) {
        if self.stage != EditStage::Closed {
            return;
        }
        let snapshot = MemberDraft::from_member(&member);
        self.draft = Some(snapshot.clone());
        self.snapshot = Some(snapshot);
        self.open_member = Some(member);
        self.stage = EditStage::Editing;
    }

    /// `Closed -> Editing` with a blank draft (add flow; no id until the
    /// backend assigns one).
    pub fn open_for_add(&mut self, category: CategoryId) {
        if self.stage != EditStage::Closed {
            return;
        }
        let snapshot = MemberDraft::empty(category);
        self.draft = Some(snapshot.clone());
        self.snapshot = Some(snapshot);
        self.open_member = None;
        self.stage = EditStage::Editing;
    }

    /// Mutate the live draft while the form is open.
    pub fn update_draft(&mut self, update: impl FnOnce(&mut MemberDraft)) {
        if self.stage != EditStage::Editing {
            return;
        }
        if let Some(draft) = self.draft.as_mut() {
            update(draft);
        }
    }

    /// Form submission: `Editing -> ConfirmingPublish`. Never commits
    /// directly; publishing is externally visible and always confirms.
    pub fn submit(&mut self) {
        if self.stage == EditStage::Editing {
            self.stage = EditStage::ConfirmingPublish;
        }
    }

    /// Draft saves are low-stakes and skip confirmation:
    /// `Editing -> Closed` with a `CommitDraft` effect.
    pub fn save_as_draft(&mut self) -> WorkflowEffect {
        if self.stage != EditStage::Editing {
            return WorkflowEffect::None;
        }
        let member_id = self.member_id();
        match self.draft.clone() {
            Some(draft) => {
                self.close_and_clear();
                WorkflowEffect::CommitDraft { member_id, draft }
            }
            None => WorkflowEffect::None,
        }
    }

    /// Confirm the active dialog.
    ///
    /// From `ConfirmingPublish`: `CommitPublish` effect, then `Closed`.
    /// From `ConfirmingDiscard`: discard the draft, then `Closed`.
    pub fn confirm(&mut self) -> WorkflowEffect {
        match self.stage {
            EditStage::ConfirmingPublish => {
                let member_id = self.member_id();
                match self.draft.clone() {
                    Some(draft) => {
                        self.close_and_clear();
                        WorkflowEffect::CommitPublish { member_id, draft }
                    }
                    None => {
                        self.close_and_clear();
                        WorkflowEffect::None
                    }
                }
            }
            EditStage::ConfirmingDiscard => {
                self.close_and_clear();
                WorkflowEffect::None
            }
            _ => WorkflowEffect::None,
        }
    }

    /// Back out of either confirmation dialog, draft intact.
    pub fn cancel(&mut self) {
        if matches!(
            self.stage,
            EditStage::ConfirmingPublish | EditStage::ConfirmingDiscard
        ) {
            self.stage = EditStage::Editing;
        }
    }

    /// Close request from the form.
    ///
    /// Dirty drafts go to `ConfirmingDiscard`; an unchanged draft closes
    /// directly (no confirmation fatigue on a no-op close).
    pub fn request_close(&mut self) {
        if self.stage != EditStage::Editing {
            return;
        }
        if self.is_dirty() {
            self.stage = EditStage::ConfirmingDiscard;
        } else {
            self.close_and_clear();
        }
    }

    /// Entry into `Closed` always clears the whole session so the next
    /// `open_for_edit` starts from a clean snapshot.
    fn close_and_clear(&mut self) {
        self.stage = EditStage::Closed;
        self.open_member = None;
        self.snapshot = None;
        self.draft = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rosterly_domain::{Category, ImageId, MemberStatus};

    fn member(name: &str) -> Member {
        Member {
            id: MemberId::from_i64(1),
            full_name: name.to_string(),
            description: "a description long enough to publish".to_string(),
            photo: None,
            status: MemberStatus::Draft,
            category: Category::new(CategoryId::from_i64(1), "Core Team"),
        }
    }

    #[test]
    fn test_open_for_edit_snapshots_the_member() {
        let mut wf = EditWorkflow::new();
        wf.open_for_edit(member("X"));

        assert_eq!(wf.stage(), EditStage::Editing);
        assert_eq!(wf.member_id(), Some(MemberId::from_i64(1)));
        assert!(!wf.is_dirty());
    }

    #[test]
    fn test_submit_always_confirms_never_commits() {
        let mut wf = EditWorkflow::new();
        wf.open_for_edit(member("X"));

        wf.submit();
        assert_eq!(wf.stage(), EditStage::ConfirmingPublish);
        // Draft still intact; nothing committed yet.
        assert!(wf.draft().is_some());
    }

    #[test]
    fn test_confirm_publish_emits_commit_and_closes() {
        let mut wf = EditWorkflow::new();
        wf.open_for_edit(member("X"));
        wf.update_draft(|d| d.full_name = "Y".to_string());
        wf.submit();

        let effect = wf.confirm();
        match effect {
            WorkflowEffect::CommitPublish { member_id, draft } => {
                assert_eq!(member_id, Some(MemberId::from_i64(1)));
                assert_eq!(draft.full_name, "Y");
            }
            other => panic!("expected CommitPublish, got {other:?}"),
        }
        assert_eq!(wf.stage(), EditStage::Closed);
        assert!(wf.draft().is_none());
        assert!(wf.open_member().is_none());
    }

    #[test]
    fn test_cancel_publish_returns_to_editing_with_draft_intact() {
        let mut wf = EditWorkflow::new();
        wf.open_for_edit(member("X"));
        wf.update_draft(|d| d.full_name = "Y".to_string());
        wf.submit();

        wf.cancel();
        assert_eq!(wf.stage(), EditStage::Editing);
        assert_eq!(wf.draft().map(|d| d.full_name.as_str()), Some("Y"));
    }

    #[test]
    fn test_save_as_draft_skips_confirmation() {
        let mut wf = EditWorkflow::new();
        wf.open_for_edit(member("X"));
        wf.update_draft(|d| d.description = "work in progress".to_string());

        let effect = wf.save_as_draft();
        assert!(matches!(effect, WorkflowEffect::CommitDraft { .. }));
        assert_eq!(wf.stage(), EditStage::Closed);
    }

    #[test]
    fn test_clean_close_skips_discard_confirmation() {
        // No field changed: requestClose goes straight to Closed.
        let mut wf = EditWorkflow::new();
        wf.open_for_edit(member("X"));

        wf.request_close();
        assert_eq!(wf.stage(), EditStage::Closed);
    }

    #[test]
    fn test_dirty_close_requires_discard_confirmation() {
        let mut wf = EditWorkflow::new();
        wf.open_for_edit(member("X"));
        wf.update_draft(|d| d.full_name = "Y".to_string());

        wf.request_close();
        assert_eq!(wf.stage(), EditStage::ConfirmingDiscard);

        let effect = wf.confirm();
        assert_eq!(effect, WorkflowEffect::None);
        assert_eq!(wf.stage(), EditStage::Closed);
        assert!(wf.draft().is_none());
    }

    #[test]
    fn test_image_presence_participates_in_dirty_check() {
        let mut wf = EditWorkflow::new();
        wf.open_for_edit(member("X"));
        wf.update_draft(|d| d.photo = Some(ImageId::from_i64(4)));

        wf.request_close();
        assert_eq!(wf.stage(), EditStage::ConfirmingDiscard);
    }

    #[test]
    fn test_cancel_discard_keeps_editing() {
        let mut wf = EditWorkflow::new();
        wf.open_for_edit(member("X"));
        wf.update_draft(|d| d.full_name = "Y".to_string());
        wf.request_close();

        wf.cancel();
        assert_eq!(wf.stage(), EditStage::Editing);
        assert_eq!(wf.draft().map(|d| d.full_name.as_str()), Some("Y"));
    }

    #[test]
    fn test_untouched_add_form_closes_without_confirmation() {
        let mut wf = EditWorkflow::new();
        wf.open_for_add(CategoryId::from_i64(1));
        assert_eq!(wf.member_id(), None);

        wf.request_close();
        assert_eq!(wf.stage(), EditStage::Closed);
    }

    #[test]
    fn test_add_flow_commit_carries_no_member_id() {
        let mut wf = EditWorkflow::new();
        wf.open_for_add(CategoryId::from_i64(1));
        wf.update_draft(|d| {
            d.full_name = "New Person".to_string();
        });

        let effect = wf.save_as_draft();
        match effect {
            WorkflowEffect::CommitDraft { member_id, draft } => {
                assert_eq!(member_id, None);
                assert_eq!(draft.full_name, "New Person");
            }
            other => panic!("expected CommitDraft, got {other:?}"),
        }
    }

    #[test]
    fn test_no_state_leaks_between_sessions() {
        let mut wf = EditWorkflow::new();
        wf.open_for_edit(member("X"));
        wf.update_draft(|d| d.full_name = "Y".to_string());
        wf.submit();
        wf.confirm();

        // A fresh session starts from a clean snapshot.
        wf.open_for_edit(member("Z"));
        assert!(!wf.is_dirty());
        assert_eq!(wf.draft().map(|d| d.full_name.as_str()), Some("Z"));
    }

    #[test]
    fn test_transitions_outside_editing_are_noops() {
        let mut wf = EditWorkflow::new();
        wf.submit();
        assert_eq!(wf.stage(), EditStage::Closed);
        assert_eq!(wf.save_as_draft(), WorkflowEffect::None);
        assert_eq!(wf.confirm(), WorkflowEffect::None);
        wf.request_close();
        assert_eq!(wf.stage(), EditStage::Closed);
    }
}
