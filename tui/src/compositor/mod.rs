//! Layered Compositor
//!
//! Manages z-ordered layers for rendering. The page body sits at the
//! bottom; header, status line, badges, the menu panel, toasts, and the
//! project modal stack on top of it.
//!
//! Transparent layers let the layers below show through wherever they left
//! a blank cell. Opaque layers (the modal, the menu) cover their whole area.

mod layer;

use std::collections::HashMap;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

pub use layer::Layer;

/// Unique identifier for a layer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LayerId(u32);

/// The compositor manages all layers and composites them together
pub struct Compositor {
    /// All layers by ID
    layers: HashMap<LayerId, Layer>,
    /// Layers sorted by z-index for rendering
    render_order: Vec<LayerId>,
    /// Next layer ID to assign
    next_id: u32,
    /// Output buffer (composited result)
    output: Buffer,
    /// Total area
    area: Rect,
}

impl Compositor {
    /// Create a new compositor for the given area
    pub fn new(area: Rect) -> Self {
        Self {
            layers: HashMap::new(),
            render_order: Vec::new(),
            next_id: 0,
            output: Buffer::empty(area),
            area,
        }
    }

    /// Total area covered by the output
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Create a new layer and return its ID
    pub fn create_layer(&mut self, bounds: Rect, z_index: i32) -> LayerId {
        let id = LayerId(self.next_id);
        self.next_id += 1;

        self.layers.insert(id, Layer::new(id, bounds, z_index));
        self.update_render_order();

        id
    }

    /// Get a layer
    pub fn layer(&self, id: LayerId) -> Option<&Layer> {
        self.layers.get(&id)
    }

    /// Get mutable access to a layer's buffer for rendering
    pub fn layer_buffer_mut(&mut self, id: LayerId) -> Option<&mut Buffer> {
        self.layers.get_mut(&id).map(|l| &mut l.buffer)
    }

    /// Mark a layer opaque (covers what is beneath it, blanks included)
    pub fn set_opaque(&mut self, id: LayerId, opaque: bool) {
        if let Some(layer) = self.layers.get_mut(&id) {
            layer.opaque = opaque;
        }
    }

    /// Set layer visibility
    pub fn set_visible(&mut self, id: LayerId, visible: bool) {
        if let Some(layer) = self.layers.get_mut(&id) {
            layer.visible = visible;
        }
    }

    /// Move and resize a layer, clearing its buffer if the size changed
    pub fn set_bounds(&mut self, id: LayerId, bounds: Rect) {
        if let Some(layer) = self.layers.get_mut(&id) {
            if layer.bounds.width != bounds.width || layer.bounds.height != bounds.height {
                layer.buffer = Buffer::empty(Rect::new(0, 0, bounds.width, bounds.height));
            }
            layer.bounds = bounds;
        }
    }

    /// Resize the entire compositor
    pub fn resize(&mut self, area: Rect) {
        self.area = area;
        self.output = Buffer::empty(area);
    }

    /// Composite all visible layers into the output buffer
    pub fn composite(&mut self) -> &Buffer {
        self.output.reset();

        // Back to front
        for id in &self.render_order {
            if let Some(layer) = self.layers.get(id) {
                if layer.visible {
                    Self::blit_layer(&mut self.output, self.area, layer);
                }
            }
        }

        &self.output
    }

    /// Blit a layer onto the output buffer
    fn blit_layer(output: &mut Buffer, area: Rect, layer: &Layer) {
        let lb = layer.bounds;

        for ly in 0..lb.height {
            for lx in 0..lb.width {
                let dst_x = lb.x.saturating_add(lx);
                let dst_y = lb.y.saturating_add(ly);

                if dst_x >= area.x + area.width || dst_y >= area.y + area.height {
                    continue;
                }

                let Some(src_cell) = layer.buffer.cell((lx, ly)) else {
                    continue;
                };

                // Transparent layers leave blank cells as holes
                if !layer.opaque && src_cell.symbol() == " " {
                    continue;
                }

                if let Some(dst_cell) = output.cell_mut((dst_x, dst_y)) {
                    *dst_cell = src_cell.clone();
                }
            }
        }
    }

    /// Find the topmost visible layer at a screen position (for mouse events)
    pub fn layer_at(&self, x: u16, y: u16) -> Option<LayerId> {
        self.render_order.iter().rev().copied().find(|id| {
            self.layers
                .get(id)
                .is_some_and(|layer| layer.visible && layer.contains(x, y))
        })
    }

    /// Update render order based on z-indices (stable for equal z)
    fn update_render_order(&mut self) {
        let mut order: Vec<LayerId> = self.layers.keys().copied().collect();
        order.sort_by_key(|id| (self.layers.get(id).map_or(0, |l| l.z_index), id.0));
        self.render_order = order;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Style;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf.cell((x, y)).map_or(" ", |c| c.symbol()))
            .collect()
    }

    #[test]
    fn test_higher_layer_wins() {
        let mut compositor = Compositor::new(Rect::new(0, 0, 6, 1));
        let low = compositor.create_layer(Rect::new(0, 0, 6, 1), 0);
        let high = compositor.create_layer(Rect::new(2, 0, 2, 1), 10);

        compositor
            .layer_buffer_mut(low)
            .unwrap()
            .set_string(0, 0, "abcdef", Style::default());
        compositor
            .layer_buffer_mut(high)
            .unwrap()
            .set_string(0, 0, "XY", Style::default());

        assert_eq!(row(compositor.composite(), 0), "abXYef");
    }

    #[test]
    fn test_transparent_blanks_show_through() {
        let mut compositor = Compositor::new(Rect::new(0, 0, 4, 1));
        let low = compositor.create_layer(Rect::new(0, 0, 4, 1), 0);
        let high = compositor.create_layer(Rect::new(0, 0, 4, 1), 5);

        compositor
            .layer_buffer_mut(low)
            .unwrap()
            .set_string(0, 0, "abcd", Style::default());
        compositor
            .layer_buffer_mut(high)
            .unwrap()
            .set_string(1, 0, "Z", Style::default());

        assert_eq!(row(compositor.composite(), 0), "aZcd");

        compositor.set_opaque(high, true);
        assert_eq!(row(compositor.composite(), 0), " Z  ");
    }

    #[test]
    fn test_hidden_layer_not_drawn() {
        let mut compositor = Compositor::new(Rect::new(0, 0, 3, 1));
        let layer = compositor.create_layer(Rect::new(0, 0, 3, 1), 0);
        compositor
            .layer_buffer_mut(layer)
            .unwrap()
            .set_string(0, 0, "abc", Style::default());
        compositor.set_visible(layer, false);

        assert_eq!(row(compositor.composite(), 0), "   ");
        assert_eq!(compositor.layer_at(1, 0), None);
    }

    #[test]
    fn test_layer_at_prefers_front() {
        let mut compositor = Compositor::new(Rect::new(0, 0, 10, 5));
        let back = compositor.create_layer(Rect::new(0, 0, 10, 5), 0);
        let front = compositor.create_layer(Rect::new(5, 2, 3, 1), 40);

        assert_eq!(compositor.layer_at(6, 2), Some(front));
        assert_eq!(compositor.layer_at(1, 1), Some(back));
    }

    #[test]
    fn test_set_bounds_resizes_buffer() {
        let mut compositor = Compositor::new(Rect::new(0, 0, 10, 5));
        let layer = compositor.create_layer(Rect::new(0, 0, 2, 2), 0);
        compositor.set_bounds(layer, Rect::new(1, 1, 4, 3));

        let buf = compositor.layer_buffer_mut(layer).unwrap();
        assert_eq!(buf.area, Rect::new(0, 0, 4, 3));
    }
}
