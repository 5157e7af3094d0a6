/// Tags rendered per row before collapsing the rest into `+K more`.
pub const MAX_VISIBLE_SPECIALTIES: usize = 3;

/// How one advocate's specialties are shown in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialtyDisplay<'a> {
    pub visible: &'a [String],
    pub hidden: usize,
}

impl SpecialtyDisplay<'_> {
    pub fn overflow_label(&self) -> Option<String> {
        (self.hidden > 0).then(|| format!("+{} more", self.hidden))
    }
}

pub fn visible_specialties(specialties: &[String]) -> SpecialtyDisplay<'_> {
    let shown = specialties.len().min(MAX_VISIBLE_SPECIALTIES);
    SpecialtyDisplay {
        visible: &specialties[..shown],
        hidden: specialties.len() - shown,
    }
}
