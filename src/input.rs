use web_sys as web;

/// Active orbit drag. Only the pointer that started the drag moves the camera.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct DragState {
    pub active: bool,
    pub pointer_id: i32,
    pub last_x: f32,
    pub last_y: f32,
}

impl DragState {
    pub fn begin(&mut self, pointer_id: i32, x: f32, y: f32) {
        self.active = true;
        self.pointer_id = pointer_id;
        self.last_x = x;
        self.last_y = y;
    }

    /// Movement since the previous sample, if this pointer is dragging.
    pub fn drag_to(&mut self, pointer_id: i32, x: f32, y: f32) -> Option<(f32, f32)> {
        if !self.active || pointer_id != self.pointer_id {
            return None;
        }
        let delta = (x - self.last_x, y - self.last_y);
        self.last_x = x;
        self.last_y = y;
        Some(delta)
    }

    /// Returns whether a drag ended.
    pub fn end(&mut self, pointer_id: i32) -> bool {
        if self.active && pointer_id == self.pointer_id {
            self.active = false;
            return true;
        }
        false
    }
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_client_xy(ev: &web::MouseEvent) -> (f32, f32) {
    (ev.client_x() as f32, ev.client_y() as f32)
}

/// Wheel deltas reduce to a direction; magnitude differs wildly between devices.
#[inline]
pub fn wheel_direction(delta_y: f64) -> f32 {
    if delta_y < 0.0 {
        -1.0
    } else if delta_y > 0.0 {
        1.0
    } else {
        0.0
    }
}
