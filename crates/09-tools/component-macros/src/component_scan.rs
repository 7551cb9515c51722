//! 组件扫描声明宏实现

use crate::utils::{
    ensure_concrete, generate_registration_code, is_valid_module_path, parse_struct,
};
use proc_macro::TokenStream;
use quote::quote;
use syn::{
    bracketed, parse::Parse, parse::ParseStream, punctuated::Punctuated, Ident, LitStr, Result,
    Token,
};

/// 组件扫描参数
#[derive(Clone, Default)]
pub struct ComponentScanArgs {
    /// 位置参数及 `value = [...]`
    pub value: Vec<LitStr>,
    /// `base_packages = [...]`
    pub base_packages: Vec<LitStr>,
}

impl Parse for ComponentScanArgs {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut args = ComponentScanArgs::default();

        while !input.is_empty() {
            if input.peek(LitStr) {
                args.value.push(parse_package(input)?);
            } else {
                let key: Ident = input.parse()?;
                input.parse::<Token![=]>()?;
                let packages = parse_package_list(input)?;

                if key == "value" {
                    args.value.extend(packages);
                } else if key == "base_packages" {
                    args.base_packages.extend(packages);
                } else {
                    return Err(syn::Error::new(
                        key.span(),
                        format!("未知的 component_scan 参数: {}", key),
                    ));
                }
            }

            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }

        Ok(args)
    }
}

/// 解析 `"a::b"` 或 `["a::b", "c"]`
fn parse_package_list(input: ParseStream) -> Result<Vec<LitStr>> {
    if input.peek(syn::token::Bracket) {
        let content;
        bracketed!(content in input);
        let packages = Punctuated::<LitStr, Token![,]>::parse_terminated(&content)?;
        packages.into_iter().map(validate_package).collect()
    } else {
        Ok(vec![parse_package(input)?])
    }
}

fn parse_package(input: ParseStream) -> Result<LitStr> {
    validate_package(input.parse()?)
}

fn validate_package(package: LitStr) -> Result<LitStr> {
    if is_valid_module_path(&package.value()) {
        Ok(package)
    } else {
        Err(syn::Error::new(
            package.span(),
            format!("无效的模块路径: {:?}", package.value()),
        ))
    }
}

/// 实现 #[component_scan] 宏
pub fn component_scan_impl(args: TokenStream, input: TokenStream) -> TokenStream {
    let scan_args = if args.is_empty() {
        ComponentScanArgs::default()
    } else {
        match syn::parse::<ComponentScanArgs>(args) {
            Ok(args) => args,
            Err(e) => return e.to_compile_error().into(),
        }
    };

    let input_struct = match parse_struct(input.into(), "component_scan") {
        Ok(item) => item,
        Err(e) => return e.to_compile_error().into(),
    };
    if let Err(e) = ensure_concrete(&input_struct) {
        return e.to_compile_error().into();
    }

    let value = &scan_args.value;
    let base_packages = &scan_args.base_packages;

    let registration_code = generate_registration_code(
        &input_struct.ident,
        "component_scan",
        quote! {
            ::infrastructure_common::Annotation::ComponentScan(
                ::infrastructure_common::ComponentScanAttributes {
                    value: &[#(#value),*],
                    base_packages: &[#(#base_packages),*],
                }
            )
        },
    );

    let expanded = quote! {
        #input_struct

        #registration_code
    };

    TokenStream::from(expanded)
}
