//! Reorderable list surface
//!
//! The drag surface turns a stream of gesture updates into slot orders. While a
//! gesture is active it only previews where the dragged item would land; when
//! the gesture ends it reports the settled permutation, which the session
//! consumes through `PuzzleSession::apply_reorder`.

use crate::core::Order;

/// One gesture sample from the input layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragUpdate {
    /// Item (index into the word list) being dragged
    pub item: usize,
    /// `false` once the pointer is released
    pub active: bool,
    /// Distance moved since the gesture started, in rows; negative is upwards
    pub displacement: f32,
}

impl DragUpdate {
    #[must_use]
    pub const fn moving(item: usize, displacement: f32) -> Self {
        Self {
            item,
            active: true,
            displacement,
        }
    }

    #[must_use]
    pub const fn release(item: usize, displacement: f32) -> Self {
        Self {
            item,
            active: false,
            displacement,
        }
    }
}

/// A control that lets the player drag items into a new order
pub trait ReorderSurface {
    fn item_count(&self) -> usize;

    /// Settled order
    fn order(&self) -> &Order;

    /// Order to display right now, including an in-flight drag
    fn preview(&self) -> Order;

    /// Feed one gesture update
    ///
    /// Returns the settled order once the gesture ends (`active == false`),
    /// even when it equals the order before the gesture.
    fn drag(&mut self, update: DragUpdate) -> Option<Order>;

    /// Replace the settled order, dropping any in-flight gesture
    fn reset(&mut self, order: Order);
}

/// Slot the dragged item lands in: nearest row, clamped to the list
#[must_use]
pub fn target_slot(slot: usize, displacement: f32, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let landed = (slot as f32 + displacement).round();
    landed.clamp(0.0, (len - 1) as f32) as usize
}

/// Plain list implementation of [`ReorderSurface`]
#[derive(Debug, Clone)]
pub struct ListSurface {
    order: Order,
    gesture: Option<DragUpdate>,
}

impl ListSurface {
    #[must_use]
    pub fn new(item_count: usize, initial: Option<Order>) -> Self {
        let order = initial
            .filter(|o| o.check(item_count).is_ok())
            .unwrap_or_else(|| Order::identity(item_count));
        Self {
            order,
            gesture: None,
        }
    }

    /// Gesture in flight, if any
    #[must_use]
    pub fn gesture(&self) -> Option<DragUpdate> {
        self.gesture
    }

    fn landing(&self, update: DragUpdate) -> Order {
        match self.order.slot_of(update.item) {
            Some(slot) => {
                let to = target_slot(slot, update.displacement, self.order.len());
                self.order.moved(slot, to)
            }
            None => self.order.clone(),
        }
    }
}

impl ReorderSurface for ListSurface {
    fn item_count(&self) -> usize {
        self.order.len()
    }

    fn order(&self) -> &Order {
        &self.order
    }

    fn preview(&self) -> Order {
        self.gesture
            .map_or_else(|| self.order.clone(), |update| self.landing(update))
    }

    fn drag(&mut self, update: DragUpdate) -> Option<Order> {
        if update.active {
            self.gesture = Some(update);
            return None;
        }

        self.gesture = None;
        self.order = self.landing(update);
        Some(self.order.clone())
    }

    fn reset(&mut self, order: Order) {
        self.order = order;
        self.gesture = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_slot_rounds_and_clamps() {
        assert_eq!(target_slot(1, 0.4, 4), 1);
        assert_eq!(target_slot(1, 0.6, 4), 2);
        assert_eq!(target_slot(1, -3.0, 4), 0);
        assert_eq!(target_slot(1, 9.0, 4), 3);
        assert_eq!(target_slot(0, 1.0, 0), 0);
    }

    #[test]
    fn active_gesture_only_previews() {
        let mut surface = ListSurface::new(3, None);
        assert_eq!(surface.drag(DragUpdate::moving(0, 2.0)), None);

        assert_eq!(surface.order(), &Order::identity(3));
        assert_eq!(surface.preview().as_slice(), &[1, 2, 0]);
        assert!(surface.gesture().is_some());
    }

    #[test]
    fn release_settles_moved_order() {
        let mut surface = ListSurface::new(4, None);
        surface.drag(DragUpdate::moving(3, -1.2));
        let settled = surface.drag(DragUpdate::release(3, -2.0)).unwrap();

        assert_eq!(settled.as_slice(), &[0, 3, 1, 2]);
        assert_eq!(surface.order(), &settled);
        assert!(surface.gesture().is_none());
    }

    #[test]
    fn release_in_place_reports_same_order() {
        let initial = Order::new(vec![2, 0, 1], 3).unwrap();
        let mut surface = ListSurface::new(3, Some(initial.clone()));
        let settled = surface.drag(DragUpdate::release(0, 0.3)).unwrap();
        assert_eq!(settled, initial);
    }

    #[test]
    fn displacement_is_relative_to_current_slot() {
        let initial = Order::new(vec![2, 0, 1], 3).unwrap();
        let mut surface = ListSurface::new(3, Some(initial));
        // Item 2 sits in slot 0
        let settled = surface.drag(DragUpdate::release(2, 1.0)).unwrap();
        assert_eq!(settled.as_slice(), &[0, 2, 1]);
    }

    #[test]
    fn malformed_initial_order_falls_back_to_identity() {
        let surface = ListSurface::new(3, Some(Order::identity(2)));
        assert_eq!(surface.order(), &Order::identity(3));
    }

    #[test]
    fn reset_drops_gesture() {
        let mut surface = ListSurface::new(3, None);
        surface.drag(DragUpdate::moving(1, 1.0));
        surface.reset(Order::new(vec![2, 1, 0], 3).unwrap());
        assert_eq!(surface.preview().as_slice(), &[2, 1, 0]);
    }
}
