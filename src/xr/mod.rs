// ============================================================================
// XR 输入与姿态
// 视点姿态、控制器离散输入符号、隐藏手势识别
// ============================================================================

use crate::impl_default;
use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

pub mod gesture;
pub mod input;

pub use gesture::{GestureProgress, GestureRecognizer};
pub use input::{ControllerButtons, ControllerState, InputSymbol, SymbolDecoder};

/// 姿态（位置 + 朝向）
///
/// 约定与 OpenXR 相同：右手坐标系，+Y 向上，视线方向为 -Z。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec3,
    pub orientation: Quat,
}

impl_default!(Pose {
    position: Vec3::ZERO,
    orientation: Quat::IDENTITY,
});

impl Pose {
    pub fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// 视线方向
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    /// 投影到水平面的视线方向
    ///
    /// 抬头或低头时面板不跟着翻转；垂直看时没有水平分量，退回到 -Z。
    pub fn horizontal_forward(&self) -> Vec3 {
        let forward = self.forward();
        Vec3::new(forward.x, 0.0, forward.z)
            .try_normalize()
            .unwrap_or(Vec3::NEG_Z)
    }

    /// 把局部坐标变换到世界坐标
    pub fn transform_point(&self, local: Vec3) -> Vec3 {
        self.position + self.orientation * local
    }

    /// 两个姿态之间插值
    pub fn lerp(&self, other: &Pose, t: f32) -> Pose {
        let t = t.clamp(0.0, 1.0);
        Pose {
            position: self.position.lerp(other.position, t),
            orientation: self.orientation.slerp(other.orientation, t),
        }
    }
}

/// 手
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hand {
    Left,
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_follows_orientation() {
        let pose = Pose::default();
        assert!((pose.forward() - Vec3::NEG_Z).length() < 1e-5);

        let turned = Pose::new(Vec3::ZERO, Quat::from_rotation_y(std::f32::consts::FRAC_PI_2));
        assert!((turned.forward() - Vec3::NEG_X).length() < 1e-5);
    }

    #[test]
    fn test_horizontal_forward_ignores_pitch() {
        let looking_down = Pose::new(Vec3::ZERO, Quat::from_rotation_x(-0.6));
        let flat = looking_down.horizontal_forward();
        assert!(flat.y.abs() < 1e-6);
        assert!((flat - Vec3::NEG_Z).length() < 1e-5);

        let straight_down =
            Pose::new(Vec3::ZERO, Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2));
        assert!(straight_down.horizontal_forward().is_normalized());
    }

    #[test]
    fn test_lerp_clamps_and_interpolates() {
        let a = Pose::default();
        let b = Pose::new(Vec3::new(2.0, 0.0, 0.0), Quat::from_rotation_y(1.0));

        let mid = a.lerp(&b, 0.5);
        assert!((mid.position - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-5);
        assert!(mid.orientation.angle_between(Quat::from_rotation_y(0.5)) < 1e-4);

        assert_eq!(a.lerp(&b, 2.0).position, b.position);
        assert_eq!(a.lerp(&b, -1.0).position, a.position);
    }
}
