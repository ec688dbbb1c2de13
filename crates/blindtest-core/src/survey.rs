use serde::Serialize;

use crate::consts::SLOT_COUNT;
use crate::error::{BlindTestError, Result};

/// Who is answering.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Respondent {
    pub name: String,
    pub country: String,
}

/// Answers for one group of images.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GroupResponse {
    pub best: Option<usize>,
    pub worst: Option<usize>,
    /// "The remaining are equivalent".
    pub equivalent: bool,
}

impl GroupResponse {
    pub fn is_complete(&self) -> bool {
        self.best.is_some() && self.worst.is_some()
    }
}

/// Everything the respondent has entered so far, plus the group cursor and
/// the compare selection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SurveyState {
    pub respondent: Respondent,
    group: usize,
    groups: Vec<GroupResponse>,
    #[serde(skip)]
    compare: [bool; SLOT_COUNT],
}

impl SurveyState {
    pub fn new(total_groups: usize) -> Result<Self> {
        if total_groups == 0 {
            return Err(BlindTestError::NoGroups);
        }
        Ok(Self {
            respondent: Respondent::default(),
            group: 0,
            groups: vec![GroupResponse::default(); total_groups],
            compare: [false; SLOT_COUNT],
        })
    }

    pub fn total_groups(&self) -> usize {
        self.groups.len()
    }

    /// Zero-based index of the group on screen.
    pub fn group_index(&self) -> usize {
        self.group
    }

    pub fn current(&self) -> &GroupResponse {
        &self.groups[self.group]
    }

    pub fn responses(&self) -> &[GroupResponse] {
        &self.groups
    }

    pub fn can_go_back(&self) -> bool {
        self.group > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.group + 1 < self.groups.len()
    }

    pub fn next_group(&mut self) {
        self.group = (self.group + 1).min(self.groups.len() - 1);
    }

    pub fn prev_group(&mut self) {
        self.group = self.group.saturating_sub(1);
    }

    /// Mark `slot` as best in the current group, replacing any previous pick.
    pub fn select_best(&mut self, slot: usize) -> Result<()> {
        check_slot(slot)?;
        self.groups[self.group].best = Some(slot);
        Ok(())
    }

    /// Mark `slot` as worst in the current group, replacing any previous pick.
    pub fn select_worst(&mut self, slot: usize) -> Result<()> {
        check_slot(slot)?;
        self.groups[self.group].worst = Some(slot);
        Ok(())
    }

    pub fn toggle_equivalent(&mut self) {
        let g = &mut self.groups[self.group];
        g.equivalent = !g.equivalent;
    }

    pub fn toggle_compare(&mut self, slot: usize) -> Result<()> {
        check_slot(slot)?;
        self.compare[slot] = !self.compare[slot];
        Ok(())
    }

    pub fn is_selected_for_compare(&self, slot: usize) -> bool {
        self.compare.get(slot).copied().unwrap_or(false)
    }

    /// Slots ticked for comparison, in slot order.
    pub fn compare_selection(&self) -> Vec<usize> {
        (0..SLOT_COUNT).filter(|&i| self.compare[i]).collect()
    }

    /// Number of groups with both a best and a worst pick.
    pub fn completed_groups(&self) -> usize {
        self.groups.iter().filter(|g| g.is_complete()).count()
    }
}

fn check_slot(slot: usize) -> Result<()> {
    if slot < SLOT_COUNT {
        Ok(())
    } else {
        Err(BlindTestError::SlotOutOfRange {
            slot,
            count: SLOT_COUNT,
        })
    }
}
