use crate::gear::{GearRecord, Grams, Millimeters};

/// Parallel series for the chart renderer, one entry per record.
///
/// A pure projection of an already filtered and sorted selection; every
/// vector has the same length and index `i` always refers to the same record.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChartData {
    /// `brand [model] size`, full or shorthand per the caller's flag.
    pub labels: Vec<String>,
    /// Always-shorthand labels drawn next to the bars.
    pub short_labels: Vec<String>,
    pub expansion: Vec<Option<[Millimeters; 2]>>,
    pub operational: Vec<Option<[Millimeters; 2]>>,
    pub p1: Vec<Option<Millimeters>>,
    pub p1_5: Vec<Option<Millimeters>>,
    pub p2: Vec<Option<Millimeters>>,
    pub weight: Vec<Grams>,
    /// Bar fill colour.
    pub colors: Vec<String>,
    /// Label text colour that stays readable on the bar.
    pub text_colors: Vec<String>,
    /// Operational width with one decimal, blank where it has no meaning.
    pub spans: Vec<String>,
}

impl ChartData {
    pub fn project(records: &[&GearRecord], shorthand: bool) -> Self {
        let mut data = Self::default();
        for record in records {
            data.push(record, shorthand);
        }
        data
    }

    fn push(&mut self, record: &GearRecord, shorthand: bool) {
        let expansion = record.expansion();
        let operational = record.operational();
        let passive = record.passive();

        self.labels.push(record.label(shorthand));
        self.short_labels.push(record.label(true));
        self.expansion.push(expansion.map(|e| [e.min, e.max]));
        self.operational.push(operational.map(|o| [o.min, o.max]));
        self.p1.push(passive.map(|p| p.p1));
        self.p1_5.push(passive.and_then(|p| p.p1_5));
        self.p2.push(passive.map(|p| p.p2));
        self.weight.push(record.weight());
        self.colors.push(record.color().hex().to_string());
        self.text_colors.push(record.color().text_hex().to_string());

        let span = match operational {
            Some(range) if record.gear_type().has_span() => format!("{:.1}", range.width()),
            _ => String::new(),
        };
        self.spans.push(span);
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
