//! Application state

use armour_core::storage::{load_json, save_json};
use armour_core::{
    all_formulas, ArmourFormula, ChartConfig, ChartDataType, PersistedNumberSet, SharedStorage,
    StorageKey,
};
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// Top-level view, persisted between sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    Tables,
    Chart,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Tables, Tab::Chart, Tab::Help]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Tables => "Tables",
            Tab::Chart => "Chart",
            Tab::Help => "Help",
        }
    }
}

/// Which set a typed value lands in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputTarget {
    ArmourRow,
    DamageTable,
}

impl InputTarget {
    pub fn label(&self) -> &'static str {
        match self {
            InputTarget::ArmourRow => "Add armour row",
            InputTarget::DamageTable => "Add damage table",
        }
    }
}

/// Pending numeric input
pub struct InputState {
    pub target: InputTarget,
    pub buffer: String,
}

pub struct App {
    pub current_tab: Tab,
    pub armours: PersistedNumberSet,
    pub damages: PersistedNumberSet,
    pub chart: ChartConfig,
    pub chart_data_type: ChartDataType,
    /// Legacy formula variants visible
    pub compare: bool,
    pub selected_table: usize,
    pub selected_row: usize,
    /// Index into the damage set for the charted hit
    pub chart_damage: usize,
    pub input: Option<InputState>,
    storage: SharedStorage,
}

impl App {
    pub fn new(storage: SharedStorage, chart: ChartConfig) -> Self {
        let armours = PersistedNumberSet::armour_values(Rc::clone(&storage));
        let damages = PersistedNumberSet::damage_values(Rc::clone(&storage));

        let current_tab = load_json(&*storage.borrow(), StorageKey::Mode).unwrap_or(Tab::Tables);
        let chart_data_type = load_json(&*storage.borrow(), StorageKey::ChartDataType)
            .unwrap_or(ChartDataType::TotalDamage);

        App {
            current_tab,
            armours,
            damages,
            chart,
            chart_data_type,
            compare: false,
            selected_table: 0,
            selected_row: 0,
            chart_damage: 0,
            input: None,
            storage,
        }
    }

    /// Formula variants visible under the current comparison setting
    pub fn visible_formulas(&self) -> Vec<&'static ArmourFormula> {
        all_formulas()
            .iter()
            .filter(|f| self.compare || !f.conditional_display)
            .collect()
    }

    /// Damage value charted against the armour grid
    pub fn chart_damage_input(&self) -> f64 {
        let damages = self.damages.get();
        damages.get(self.chart_damage).copied().unwrap_or(1000.0)
    }

    pub fn next_tab(&mut self) {
        let tabs = Tab::all();
        let current = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        self.current_tab = tabs[(current + 1) % tabs.len()];
        self.persist_tab();
    }

    pub fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let current = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        self.current_tab = tabs[(current + tabs.len() - 1) % tabs.len()];
        self.persist_tab();
    }

    pub fn set_tab(&mut self, index: usize) {
        if let Some(tab) = Tab::all().get(index) {
            self.current_tab = *tab;
            self.persist_tab();
        }
    }

    pub fn toggle_data_type(&mut self) {
        self.chart_data_type = match self.chart_data_type {
            ChartDataType::Reduction => ChartDataType::TotalDamage,
            ChartDataType::TotalDamage => ChartDataType::Reduction,
        };
        let _ = save_json(
            &mut *self.storage.borrow_mut(),
            StorageKey::ChartDataType,
            &self.chart_data_type,
        );
    }

    pub fn toggle_compare(&mut self) {
        self.compare = !self.compare;
    }

    pub fn on_up(&mut self) {
        match self.current_tab {
            Tab::Tables => self.selected_row = self.selected_row.saturating_sub(1),
            Tab::Chart => self.chart_damage = self.chart_damage.saturating_sub(1),
            Tab::Help => {}
        }
    }

    pub fn on_down(&mut self) {
        match self.current_tab {
            Tab::Tables => {
                if self.selected_row + 1 < self.armours.get().len() {
                    self.selected_row += 1;
                }
            }
            Tab::Chart => {
                if self.chart_damage + 1 < self.damages.get().len() {
                    self.chart_damage += 1;
                }
            }
            Tab::Help => {}
        }
    }

    pub fn on_left(&mut self) {
        if self.current_tab == Tab::Tables {
            self.selected_table = self.selected_table.saturating_sub(1);
        }
    }

    pub fn on_right(&mut self) {
        if self.current_tab == Tab::Tables && self.selected_table + 1 < self.damages.get().len() {
            self.selected_table += 1;
        }
    }

    pub fn begin_add_armour(&mut self) {
        self.input = Some(InputState {
            target: InputTarget::ArmourRow,
            buffer: String::new(),
        });
    }

    pub fn begin_add_damage(&mut self) {
        self.input = Some(InputState {
            target: InputTarget::DamageTable,
            buffer: String::new(),
        });
    }

    pub fn input_char(&mut self, c: char) {
        if let Some(input) = &mut self.input {
            if c.is_ascii_digit() || c == '.' {
                input.buffer.push(c);
            }
        }
    }

    pub fn input_backspace(&mut self) {
        if let Some(input) = &mut self.input {
            input.buffer.pop();
        }
    }

    pub fn input_cancel(&mut self) {
        self.input = None;
    }

    /// Parse the buffer and add it to the targeted set
    ///
    /// Unparseable input is discarded without feedback, matching the
    /// fallback behavior of the value stores themselves.
    pub fn input_commit(&mut self) {
        if let Some(input) = self.input.take() {
            if let Ok(value) = input.buffer.trim().parse::<f64>() {
                if value.is_finite() && value >= 0.0 {
                    match input.target {
                        InputTarget::ArmourRow => self.armours.add(value),
                        InputTarget::DamageTable => self.damages.add(value),
                    }
                }
            }
        }
    }

    pub fn remove_selected_armour(&mut self) {
        let values = self.armours.get();
        if let Some(&value) = values.get(self.selected_row) {
            self.armours.remove(value);
        }
        self.clamp_selection();
    }

    pub fn remove_selected_damage(&mut self) {
        let values = self.damages.get();
        if let Some(&value) = values.get(self.selected_table) {
            self.damages.remove(value);
        }
        self.clamp_selection();
    }

    pub fn reset_values(&mut self) {
        self.armours.reset();
        self.damages.reset();
        self.clamp_selection();
    }

    pub fn is_all_default(&self) -> bool {
        self.armours.is_default() && self.damages.is_default()
    }

    fn persist_tab(&self) {
        let _ = save_json(
            &mut *self.storage.borrow_mut(),
            StorageKey::Mode,
            &self.current_tab,
        );
    }

    fn clamp_selection(&mut self) {
        let rows = self.armours.get().len();
        if self.selected_row >= rows {
            self.selected_row = rows.saturating_sub(1);
        }

        let tables = self.damages.get().len();
        if self.selected_table >= tables {
            self.selected_table = tables.saturating_sub(1);
        }
        if self.chart_damage >= tables {
            self.chart_damage = tables.saturating_sub(1);
        }
    }
}
