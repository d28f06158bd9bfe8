//! Exclusive selection toggles
//! Each toggle holds exactly one member of its value set at all times.

use super::choices::{OrderType, PositionsTab, Side, Timeframe};

/// A closed set of mutually exclusive values.
pub trait Choice: Copy + PartialEq + Default + 'static {
    /// Every member, in display order.
    const ALL: &'static [Self];

    fn label(&self) -> &'static str;
}

/// Single active member of a `Choice` set.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Selection<T: Choice> {
    active: T,
}

impl<T: Choice> Selection<T> {
    #[cfg(test)]
    pub fn new(active: T) -> Self {
        Self { active }
    }

    pub fn active(&self) -> T {
        self.active
    }

    pub fn is_active(&self, value: &T) -> bool {
        self.active == *value
    }

    /// Replace the active member. Returns whether the selection changed.
    pub fn select(&mut self, value: T) -> bool {
        if self.active == value {
            return false;
        }
        self.active = value;
        true
    }

    /// Members paired with their active flag, in display order.
    pub fn options(&self) -> impl Iterator<Item = (T, bool)> + '_ {
        T::ALL.iter().map(move |&v| (v, self.is_active(&v)))
    }
}

/// All toggles on the screen. Lives as long as the window; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SelectionState {
    pub timeframe: Selection<Timeframe>,
    pub side: Selection<Side>,
    pub order_type: Selection<OrderType>,
    pub tab: Selection<PositionsTab>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_count<T: Choice>(sel: &Selection<T>) -> usize {
        sel.options().filter(|(_, active)| *active).count()
    }

    #[test]
    fn initial_state() {
        let state = SelectionState::default();
        assert_eq!(state.timeframe.active(), Timeframe::FifteenMinutes);
        assert_eq!(state.side.active(), Side::Buy);
        assert_eq!(state.order_type.active(), OrderType::Market);
        assert_eq!(state.tab.active(), PositionsTab::Positions);
    }

    #[test]
    fn selecting_sell_only_changes_side() {
        let mut state = SelectionState::default();
        let before = state;

        assert!(state.side.select(Side::Sell));

        assert_eq!(state.side.active(), Side::Sell);
        assert_eq!(state.timeframe, before.timeframe);
        assert_eq!(state.order_type, before.order_type);
        assert_eq!(state.tab, before.tab);
    }

    #[test]
    fn exactly_one_active_after_every_select() {
        let mut sel = Selection::<Timeframe>::default();
        let sequence = [
            Timeframe::OneHour,
            Timeframe::OneMinute,
            Timeframe::OneMonth,
            Timeframe::OneMonth,
            Timeframe::FifteenMinutes,
            Timeframe::OneWeek,
            Timeframe::OneDay,
        ];

        for tf in sequence {
            sel.select(tf);
            assert_eq!(active_count(&sel), 1);
            assert_eq!(sel.active(), tf);
            assert!(sel.is_active(&tf));
        }
    }

    #[test]
    fn reselecting_active_member_is_noop() {
        let mut sel = Selection::new(PositionsTab::OpenOrders);
        assert!(!sel.select(PositionsTab::OpenOrders));
        assert_eq!(sel.active(), PositionsTab::OpenOrders);

        assert!(sel.select(PositionsTab::HideOtherPairs));
        assert!(!sel.select(PositionsTab::HideOtherPairs));
        assert_eq!(sel.active(), PositionsTab::HideOtherPairs);
    }

    #[test]
    fn any_member_reachable_from_any_other() {
        for &from in OrderType::ALL {
            for &to in OrderType::ALL {
                let mut sel = Selection::new(from);
                sel.select(to);
                assert_eq!(sel.active(), to);
            }
        }
    }
}
