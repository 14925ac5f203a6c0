//! Procedural macros shared by the geoweave crates.
//!
//! `#[context("...")]` wraps the body of a function returning `anyhow::Result` so that every
//! error leaving the function carries an additional context line.
//!
//! ```ignore
//! #[context("reading feature store from {path:?}")]
//! fn read(path: &Path) -> Result<FeatureStore> { ... }
//! ```

mod args;

use args::ContextArgs;
use proc_macro::TokenStream;
use proc_macro2::{Ident, Span};
use quote::{ToTokens, quote};
use syn::{ItemFn, ReturnType, parse_macro_input};

#[proc_macro_attribute]
pub fn context(args: TokenStream, input: TokenStream) -> TokenStream {
	let ContextArgs {
		move_token,
		format_args,
	} = parse_macro_input!(args as ContextArgs);
	let mut function = parse_macro_input!(input as ItemFn);

	if matches!(function.sig.output, ReturnType::Default) {
		return syn::Error::new_spanned(&function.sig, "#[context] requires a function returning Result")
			.to_compile_error()
			.into();
	}

	let body = &function.block;
	let output = &function.sig.output;
	let err = Ident::new("err", Span::mixed_site());

	let wrapped = if function.sig.asyncness.is_some() {
		let ReturnType::Type(_, ty) = output else {
			unreachable!()
		};
		let result = Ident::new("result", Span::mixed_site());
		quote! {
			let #result: #ty = async #move_token { #body }.await;
			#result.map_err(|#err| #err.context(format!(#format_args)).into())
		}
	} else {
		// The moved marker forces the closure to be FnOnce.
		let once = Ident::new("once", Span::mixed_site());
		quote! {
			let #once = ::core::iter::empty::<()>();
			(#move_token || #output {
				::core::mem::drop(#once);
				#body
			})().map_err(|#err| #err.context(format!(#format_args)).into())
		}
	};
	function.block.stmts = vec![syn::Stmt::Expr(syn::Expr::Verbatim(wrapped), None)];

	function.into_token_stream().into()
}
