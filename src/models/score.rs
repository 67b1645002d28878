/// Per-question rating. The weight is what totals are summed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Score {
    #[default]
    None,
    Half,
    Full,
}

impl Score {
    pub fn weight(self) -> f32 {
        match self {
            Score::None => 0.0,
            Score::Half => 0.5,
            Score::Full => 1.0,
        }
    }

    pub fn from_weight(weight: f32) -> Option<Self> {
        [Score::None, Score::Half, Score::Full]
            .into_iter()
            .find(|score| score.weight() == weight)
    }

    /// Next value in the toggle cycle. Half is only reachable from Full.
    pub fn toggled(self) -> Self {
        match self {
            Score::None => Score::Full,
            Score::Full => Score::Half,
            Score::Half => Score::None,
        }
    }
}

/// Formats a total as its whole part plus `½` when it ends in a half.
pub fn format_total(total: f32) -> String {
    let whole = total.trunc() as i64;
    if total.fract() == 0.5 {
        format!("{whole}½")
    } else {
        whole.to_string()
    }
}
