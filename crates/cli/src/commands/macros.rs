/// Declare a command enum whose variants each live in their own module
///
/// Every module provides an `Options` type and an async `run(opts, ...)`.
/// Extra arguments declared with `#![run(name: Type)]` are forwarded to the
/// variants that list them.
macro_rules! setup_commands {
    {
        $(
            #![run($($arg_name:ident: $arg_ty:ty),*$(,)?)]
        )?
        $(
            $(#[$variant_meta:meta])*
            $variant_name:ident($mod_name:ident $(, $($pass_arg_name:ident),*$(,)?)?)
        ),*$(,)?
    } => {
        $(
            pub mod $mod_name;
        )*

        #[derive(Debug, Clone, clap::Parser)]
        pub enum Command {
            $(
                $(#[$variant_meta])*
                $variant_name($mod_name::Options)
            ),*
        }

        impl Command {
            pub async fn run(self, $($($arg_name: $arg_ty),*)?) -> anyhow::Result<()> {
                match self {
                    $(
                        Self::$variant_name(opts) => $mod_name::run(opts, $($($pass_arg_name),*)?).await
                    ),*
                }
            }
        }
    };
}

/// Declare the `Options` struct of a single command
macro_rules! setup_command {
    {
        $(
            $(#[$field_meta:meta])*
            $field_name:ident: $field_ty:ty
        ),*$(,)?
    } => {
        #[derive(Debug, Clone, clap::Parser)]
        pub struct Options {
            $(
                $(#[$field_meta])*
                pub $field_name: $field_ty
            ),*
        }
    };
}
