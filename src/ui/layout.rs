//! 面板摆放
//!
//! 面板正面为局部 +Z。展开的面板跟随视点，紧凑的面板固定在面板架上。

use crate::config::LayoutConfig;
use crate::xr::Pose;
use glam::{Quat, Vec3};

/// 展开面板的姿态：视点前方、水平朝向视点
pub fn expanded_placement(viewpoint: &Pose, config: &LayoutConfig) -> Pose {
    let forward = viewpoint.horizontal_forward();
    let position = viewpoint.position
        + forward * config.expanded_distance
        + Vec3::Y * config.expanded_height_offset;
    let yaw = (-forward.x).atan2(-forward.z);
    Pose::new(position, Quat::from_rotation_y(yaw))
}

/// 紧凑面板的姿态：面板架上的固定槽位
pub fn compact_placement(board: &Pose, slot: Vec3) -> Pose {
    Pose::new(board.transform_point(slot), board.orientation)
}

/// 第 `index` 个面板的槽位，沿面板架 X 轴排列
pub fn compact_slot(index: usize, config: &LayoutConfig) -> Vec3 {
    Vec3::X * (index as f32 * config.compact_spacing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_expanded_in_front_of_viewpoint() {
        let config = LayoutConfig::default();
        let viewpoint = Pose::new(Vec3::new(0.0, 1.7, 0.0), Quat::IDENTITY);
        let pose = expanded_placement(&viewpoint, &config);

        let expected = Vec3::new(
            0.0,
            1.7 + config.expanded_height_offset,
            -config.expanded_distance,
        );
        assert!((pose.position - expected).length() < 1e-5);
        // 正面 (+Z) 朝向视点
        let facing = pose.orientation * Vec3::Z;
        let offset = viewpoint.position - pose.position;
        let to_viewer = Vec3::new(offset.x, 0.0, offset.z).normalize();
        assert!(facing.dot(to_viewer) > 0.999);
    }

    #[test]
    fn test_expanded_follows_turning_viewpoint() {
        let config = LayoutConfig::default();
        let viewpoint = Pose::new(Vec3::ZERO, Quat::from_rotation_y(FRAC_PI_2));
        let pose = expanded_placement(&viewpoint, &config);
        // 向左转 90 度后面板在 -X 方向
        assert!(pose.position.x < -0.5);
        assert!(pose.position.z.abs() < 1e-4);
        let facing = pose.orientation * Vec3::Z;
        assert!((facing - Vec3::X).length() < 1e-4);
    }

    #[test]
    fn test_compact_ignores_viewpoint() {
        let config = LayoutConfig::default();
        let board = Pose::new(Vec3::new(2.0, 1.0, -3.0), Quat::from_rotation_y(FRAC_PI_2));
        let pose = compact_placement(&board, compact_slot(2, &config));
        // 面板架旋转后 X 轴指向 -Z
        let expected = Vec3::new(2.0, 1.0, -3.0 - 2.0 * config.compact_spacing);
        assert!((pose.position - expected).length() < 1e-4);
        assert_eq!(pose.orientation, board.orientation);
    }
}
