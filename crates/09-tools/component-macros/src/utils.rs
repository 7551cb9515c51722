//! 宏工具函数

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Ident, Item, ItemStruct, Result};

/// 解析被标注的条目，只接受结构体
pub fn parse_struct(input: TokenStream, attribute: &str) -> Result<ItemStruct> {
    let message = format!("#[{}] 只能用于结构体", attribute);
    match syn::parse2::<Item>(input)? {
        Item::Struct(item) => Ok(item),
        Item::Enum(item) => Err(syn::Error::new_spanned(&item.ident, message)),
        Item::Union(item) => Err(syn::Error::new_spanned(&item.ident, message)),
        Item::Trait(item) => Err(syn::Error::new_spanned(&item.ident, message)),
        Item::Fn(item) => Err(syn::Error::new_spanned(&item.sig.ident, message)),
        _ => Err(syn::Error::new(Span::call_site(), message)),
    }
}

/// 注解登记依赖 `TypeId`，泛型结构体没有唯一的类型
pub fn ensure_concrete(item: &ItemStruct) -> Result<()> {
    if item.generics.params.is_empty() {
        Ok(())
    } else {
        Err(syn::Error::new_spanned(
            &item.generics,
            format!("{} 不能是泛型结构体", item.ident),
        ))
    }
}

/// 生成在程序启动时登记注解的代码
pub fn generate_registration_code(
    struct_name: &Ident,
    annotation_name: &str,
    annotation: TokenStream,
) -> TokenStream {
    let registration_fn_name = registration_fn_ident(annotation_name, struct_name);

    quote! {
        #[allow(non_snake_case)]
        #[ctor::ctor]
        fn #registration_fn_name() {
            ::infrastructure_common::register_annotation(
                ::infrastructure_common::TypeInfo::of::<#struct_name>(::core::module_path!()),
                #annotation,
            );
        }
    }
}

/// 登记函数名，例如 `__register_configuration_WebConfig`
///
/// 保留结构体原名，同一模块中的不同结构体不会得到相同的函数名。
pub fn registration_fn_ident(annotation_name: &str, struct_name: &Ident) -> Ident {
    Ident::new(
        &format!("__register_{}_{}", annotation_name, struct_name),
        Span::call_site(),
    )
}

/// 验证标识符是否有效
pub fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first_char) = chars.next() else {
        return false;
    };

    // 第一个字符必须是字母或下划线
    if !first_char.is_alphabetic() && first_char != '_' {
        return false;
    }

    chars.all(|ch| ch.is_alphanumeric() || ch == '_')
}

/// 验证模块路径，例如 `my_app::web`
pub fn is_valid_module_path(s: &str) -> bool {
    s.split("::").all(is_valid_identifier)
}
