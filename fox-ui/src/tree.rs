use crate::input::Event;
use crate::renderer::DrawContext;
use crate::widgets::Widget;

/// Generational handle into a [`WidgetTree`]. A handle to a removed widget
/// never resolves again, even after its slot is reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId {
    index: u32,
    generation: u32,
}

struct Slot {
    generation: u32,
    widget: Option<Widget>,
}

/// Arena owning every widget plus the single focus pointer.
#[derive(Default)]
pub struct WidgetTree {
    slots: Vec<Slot>,
    free: Vec<u32>,
    focused: Option<WidgetId>,
}

impl WidgetTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, widget: Widget) -> WidgetId {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.generation = slot.generation.wrapping_add(1);
            slot.widget = Some(widget);
            return WidgetId { index, generation: slot.generation };
        }
        let index = self.slots.len() as u32;
        self.slots.push(Slot { generation: 0, widget: Some(widget) });
        WidgetId { index, generation: 0 }
    }

    pub fn get(&self, id: WidgetId) -> Option<&Widget> {
        self.slots
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.widget.as_ref())
    }

    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut Widget> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.widget.as_mut())
    }

    pub fn contains(&self, id: WidgetId) -> bool {
        self.get(id).is_some()
    }

    /// Number of live widgets.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.widget.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Destroys one widget. It is unlinked from its parent and its children
    /// are orphaned, not destroyed.
    pub fn remove(&mut self, id: WidgetId) -> Option<Widget> {
        self.get(id)?;
        let mut widget = self.slots[id.index as usize].widget.take()?;
        self.free.push(id.index);

        if self.focused == Some(id) {
            self.focused = None;
        }
        if let Some(parent) = widget.parent.take() {
            if let Some(parent) = self.get_mut(parent) {
                parent.children.retain(|child| *child != id);
            }
        }
        for child in std::mem::take(&mut widget.children) {
            if let Some(child) = self.get_mut(child) {
                child.parent = None;
            }
        }
        Some(widget)
    }

    /// Destroys a widget and all of its descendants.
    pub fn remove_subtree(&mut self, id: WidgetId) {
        let children = match self.get(id) {
            Some(widget) => widget.children.clone(),
            None => return,
        };
        for child in children {
            self.remove_subtree(child);
        }
        self.remove(id);
    }

    /// Appends `child` to `parent`'s children. Duplicates and cycles are the
    /// caller's business.
    pub fn add_child(&mut self, parent: WidgetId, child: WidgetId) -> bool {
        if !self.contains(parent) {
            return false;
        }
        let Some(widget) = self.get_mut(child) else {
            return false;
        };
        widget.parent = Some(parent);
        if let Some(parent) = self.get_mut(parent) {
            parent.children.push(child);
        }
        true
    }

    pub fn remove_child(&mut self, parent: WidgetId, child: WidgetId) -> bool {
        let Some(widget) = self.get_mut(parent) else {
            return false;
        };
        let before = widget.children.len();
        widget.children.retain(|c| *c != child);
        if widget.children.len() == before {
            return false;
        }
        if let Some(child) = self.get_mut(child) {
            child.parent = None;
        }
        true
    }

    pub fn clean_children(&mut self, parent: WidgetId) {
        let Some(widget) = self.get_mut(parent) else {
            return;
        };
        for child in std::mem::take(&mut widget.children) {
            if let Some(child) = self.get_mut(child) {
                child.parent = None;
            }
        }
    }

    pub fn focused(&self) -> Option<WidgetId> {
        self.focused.filter(|id| self.contains(*id))
    }

    /// Moves focus to `id`. Returns `false` and leaves focus alone when the
    /// widget is gone or cannot take focus.
    pub fn request_focus(&mut self, id: WidgetId) -> bool {
        if !self.get(id).is_some_and(|w| w.can_focus()) {
            return false;
        }
        if let Some(previous) = self.focused.take() {
            if let Some(previous) = self.get_mut(previous) {
                previous.blur();
            }
        }
        if let Some(widget) = self.get_mut(id) {
            widget.focus();
        }
        self.focused = Some(id);
        true
    }

    /// Paints `id` and then its children, last child first.
    pub fn draw(&mut self, id: WidgetId, ctx: &mut DrawContext) {
        let children = match self.get_mut(id) {
            Some(widget) => {
                if !widget.draw(ctx) {
                    return;
                }
                widget.children.clone()
            }
            None => return,
        };
        for child in children.into_iter().rev() {
            self.draw(child, ctx);
        }
    }

    /// Children first, last child first, then the widget itself. Every
    /// widget sees the event; the handled flags are OR-ed.
    pub fn dispatch(&mut self, id: WidgetId, event: &Event) -> bool {
        let Some(widget) = self.get(id) else {
            return false;
        };
        let mut handled = false;
        for child in widget.children.clone().into_iter().rev() {
            handled |= self.dispatch(child, event);
        }

        if let Event::MouseButtonDown(ev) = event {
            let hit = match self.get_mut(id) {
                Some(widget) => widget.press(ev),
                None => return handled,
            };
            if hit {
                self.request_focus(id);
                if let Some(widget) = self.get_mut(id) {
                    handled |= widget.pressed(ev);
                }
            }
            return handled;
        }

        if let Some(widget) = self.get_mut(id) {
            handled |= widget.handle_event(event);
        }
        handled
    }
}
