use crate::models::{GroupDescriptor, ScriptDescriptor};

/// Accumulates module paths for a run of compatible combinable groups.
///
/// The run remembers the most recent group pushed into it; the combo URL is built from that
/// group's `combo_base` and `combo_sep`, which every member of the run shares by construction.
#[derive(Debug, Default)]
pub struct ComboRun<'a> {
  group: Option<&'a GroupDescriptor>,
  fragments: Vec<String>,
}

impl<'a> ComboRun<'a> {
  /// Create an empty run.
  pub fn new() -> Self {
    Self::default()
  }

  /// Returns `true` when no fragments are pending.
  pub fn is_empty(&self) -> bool {
    self.fragments.is_empty()
  }

  /// Number of pending fragments.
  pub fn len(&self) -> usize {
    self.fragments.len()
  }

  /// Whether `group` may join the pending run without flushing it first.
  ///
  /// An empty run accepts any combinable group.
  pub fn accepts(&self, group: &GroupDescriptor) -> bool {
    match self.group {
      Some(active) if !self.fragments.is_empty() => active.is_compatible_with(group),
      _ => group.combine,
    }
  }

  /// Append `group.root + path` to the run and make `group` the active group.
  pub fn push(&mut self, group: &'a GroupDescriptor, path: &str) {
    self.fragments.push(format!("{}{}", group.root, path));
    self.group = Some(group);
  }

  /// Emit the pending run as one combo descriptor and reset the buffer.
  pub fn flush(&mut self) -> Option<ScriptDescriptor> {
    if self.fragments.is_empty() {
      return None;
    }

    let group = self.group.take()?;
    let src = format!(
      "{}{}",
      group.combo_base,
      self.fragments.join(&group.combo_sep)
    );
    self.fragments.clear();
    tracing::debug!(%src, "flushed combo run");
    Some(ScriptDescriptor::new(src))
  }
}
