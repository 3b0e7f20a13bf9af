use crate::editing::{Cmd, Patch};
use crate::models::{GridDimensions, Item, ItemId, Rectangle};
use crate::output::{DerivedOutput, OutputOptions, derive_output};

/// Grid dimensions plus the ordered list of finalized items.
///
/// The derived CSS/HTML is recomputed after every applied command, so
/// [`GridDocument::output`] always reflects the current state.
#[derive(Debug, Clone, PartialEq)]
pub struct GridDocument {
    dimensions: GridDimensions,
    items: Vec<Item>,
    options: OutputOptions,
    next_id: u64,
    version: u64,
    output: DerivedOutput,
}

impl GridDocument {
    pub fn new(dimensions: GridDimensions, options: OutputOptions) -> Self {
        let output = derive_output(&dimensions, &[], &options);
        Self {
            dimensions,
            items: Vec::new(),
            options,
            next_id: 0,
            version: 0,
            output,
        }
    }

    /// Apply a command and recompute the derived output
    pub fn apply(&mut self, cmd: Cmd) -> Patch {
        let mut added = None;

        match cmd {
            Cmd::AddItem(rect) => {
                let id = self.allocate_id();
                self.items.push(Item::new(id, rect));
                added = Some(id);
            }
            Cmd::Reset => self.items.clear(),
            // Existing items keep their bounds even when they no longer fit
            Cmd::SetColumns(columns) => self.dimensions.columns = columns,
            Cmd::SetRows(rows) => self.dimensions.rows = rows,
            Cmd::SetGap(gap) => self.dimensions.gap = gap,
        }

        let output = derive_output(&self.dimensions, &self.items, &self.options);
        let output_changed = output != self.output;
        self.output = output;
        self.version += 1;

        Patch {
            added,
            output_changed,
            version: self.version,
        }
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Bounds of every item, in insertion order
    pub fn rectangles(&self) -> Vec<Rectangle> {
        self.items.iter().map(|item| item.rect).collect()
    }

    pub fn options(&self) -> &OutputOptions {
        &self.options
    }

    pub fn output(&self) -> &DerivedOutput {
        &self.output
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    fn allocate_id(&mut self) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        id
    }
}

impl Default for GridDocument {
    fn default() -> Self {
        Self::new(GridDimensions::default(), OutputOptions::default())
    }
}
