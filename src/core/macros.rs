//! 核心宏定义
//!
//! - `impl_default!` 为配置和状态结构体生成 `Default`
//! - `declare_settings!` 用一张声明表同时生成设置结构体和它的选项注册表，
//!   取代运行时反射：新增一个字段，它就会自动出现在调试面板里

/// 为结构体实现Default trait的宏
///
/// 使用示例:
/// ```rust
/// use debug_board::impl_default;
///
/// struct Spawner {
///     rate: f32,
///     name: String,
/// }
///
/// impl_default!(Spawner {
///     rate: 1.5,
///     name: "ducks".to_string(),
/// });
/// ```
#[macro_export]
macro_rules! impl_default {
    ($struct_name:ident {
        $($field:ident: $value:expr),* $(,)?
    }) => {
        impl Default for $struct_name {
            fn default() -> Self {
                Self {
                    $($field: $value),*
                }
            }
        }
    };
}

/// 声明一组布尔设置
///
/// 每个字段前的方括号是可选元数据，键名对应 [`OptionSpec`](crate::settings::OptionSpec)
/// 的构建方法：`category`、`tooltip`、`label`、`order`、`hidden`。
///
/// ```rust
/// use debug_board::declare_settings;
/// use debug_board::settings::SettingsSource;
///
/// declare_settings! {
///     /// 射击相关调试开关
///     pub struct GunSettings {
///         [category = "Gun", tooltip = "Never reload"]
///         infinite_ammo = false,
///         []
///         show_hitboxes = true,
///     }
/// }
///
/// let settings = GunSettings::default();
/// assert_eq!(settings.options().len(), 2);
/// assert_eq!(settings.get("show_hitboxes"), Some(true));
/// ```
#[macro_export]
macro_rules! declare_settings {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                [ $( $mkey:ident = $mval:expr ),* $(,)? ]
                $field:ident = $default:expr
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        $vis struct $name {
            $( pub $field: bool, )*
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $( $field: $default, )*
                }
            }
        }

        impl $crate::settings::SettingsSource for $name {
            fn options(&self) -> Vec<$crate::settings::OptionSpec> {
                vec![
                    $(
                        $crate::settings::OptionSpec::new(stringify!($field))
                            $( .$mkey($mval) )*
                    ),*
                ]
            }

            fn get(&self, key: &str) -> Option<bool> {
                match key {
                    $( stringify!($field) => Some(self.$field), )*
                    _ => None,
                }
            }

            fn set(
                &mut self,
                key: &str,
                value: bool,
            ) -> $crate::core::error::BindingResult<()> {
                match key {
                    $(
                        stringify!($field) => {
                            self.$field = value;
                            Ok(())
                        }
                    )*
                    _ => Err($crate::core::error::BindingError::UnknownOption(
                        key.to_string(),
                    )),
                }
            }
        }
    };
}
