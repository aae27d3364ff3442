/// UI flow state management
/// Which item detail is open and which gallery photo is the hero
#[derive(Debug, Default, Clone, PartialEq)]
pub struct UiState {
    /// Id of the item whose detail is shown
    pub open_item: Option<String>,
    /// Gallery index of the hero photo while an item is open
    pub hero_photo: Option<usize>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open an item, making its first photo (if any) the hero
    pub fn open(&mut self, id: impl Into<String>, has_photos: bool) {
        self.open_item = Some(id.into());
        self.hero_photo = has_photos.then_some(0);
    }

    pub fn close(&mut self) {
        self.open_item = None;
        self.hero_photo = None;
    }

    pub fn is_open(&self) -> bool {
        self.open_item.is_some()
    }
}
