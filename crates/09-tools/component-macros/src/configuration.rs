//! 配置类标记宏实现

use crate::utils::{ensure_concrete, generate_registration_code, parse_struct};
use proc_macro::TokenStream;
use quote::quote;

/// 实现 #[configuration] 宏
pub fn configuration_impl(args: TokenStream, input: TokenStream) -> TokenStream {
    let args = proc_macro2::TokenStream::from(args);
    if !args.is_empty() {
        return syn::Error::new_spanned(&args, "#[configuration] 不接受参数")
            .to_compile_error()
            .into();
    }

    let input_struct = match parse_struct(input.into(), "configuration") {
        Ok(item) => item,
        Err(e) => return e.to_compile_error().into(),
    };
    if let Err(e) = ensure_concrete(&input_struct) {
        return e.to_compile_error().into();
    }

    let registration_code = generate_registration_code(
        &input_struct.ident,
        "configuration",
        quote! { ::infrastructure_common::Annotation::Configuration },
    );

    let expanded = quote! {
        #input_struct

        #registration_code
    };

    TokenStream::from(expanded)
}
