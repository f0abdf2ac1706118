use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;
use syn::parse::{Parse, ParseStream};
use syn::{Expr, Ident, LitStr, Token};

/// Macro input representation:
/// include_dictionary!("path/to/words.txt", uppercase = true, max_words = 1000000)
struct IncludeDictionaryArgs {
    path: LitStr,
    assignments: Vec<(Ident, Expr)>,
}

impl Parse for IncludeDictionaryArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let path: LitStr = input.parse()?;

        let mut assignments = Vec::new();

        while input.parse::<Token![,]>().is_ok() {
            // trailing comma
            if input.is_empty() {
                break;
            }

            let ident: Ident = input.parse()?;
            let _eq: Token![=] = input.parse()?;
            let value: Expr = input.parse()?;

            assignments.push((ident, value));
        }

        Ok(IncludeDictionaryArgs { path, assignments })
    }
}

fn bool_arg(name: &Ident, expr: &Expr) -> syn::Result<bool> {
    match expr {
        Expr::Lit(el) => match &el.lit {
            syn::Lit::Bool(lb) => Ok(lb.value),
            other => Err(syn::Error::new_spanned(
                other,
                format!("{} must be a boolean literal", name),
            )),
        },
        other => Err(syn::Error::new_spanned(
            other,
            format!("{} must be a boolean literal expression", name),
        )),
    }
}

fn usize_arg(name: &Ident, expr: &Expr) -> syn::Result<usize> {
    match expr {
        Expr::Lit(el) => match &el.lit {
            syn::Lit::Int(li) => li.base10_parse::<usize>(),
            other => Err(syn::Error::new_spanned(
                other,
                format!("{} must be an integer literal", name),
            )),
        },
        other => Err(syn::Error::new_spanned(
            other,
            format!("{} must be an integer literal expression", name),
        )),
    }
}

/// Read the word list at `file_path`: trim each line, skip blank lines,
/// optionally uppercase, and collapse duplicates into a sorted set.
fn read_words(file_path: &Path, uppercase: bool) -> io::Result<BTreeSet<String>> {
    let reader = io::BufReader::new(File::open(file_path)?);
    let mut words = BTreeSet::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let word = if uppercase {
            trimmed.to_uppercase()
        } else {
            trimmed.to_string()
        };
        words.insert(word);
    }
    Ok(words)
}

/// include_dictionary!("path/to/words.txt", uppercase = true, max_words = 1000000)
///
/// Reads a newline-delimited word list at compile time (path relative to the
/// calling crate's `CARGO_MANIFEST_DIR`) and expands to an
/// `::spellcheckrs::EmbeddedDictionary` built from two statics:
///  - WORDS_PHF: ::phf::Set<&'static str> (membership)
///  - WORDS_SORTED: &'static [&'static str] (ascending order, used for tie-breaks)
///
/// Lines are trimmed and blank lines skipped. With `uppercase = true` (the
/// default) every word is uppercased, matching how runtime dictionaries and
/// tokens are normalized. Set it to `false` only for lists that are already
/// uppercase.
///
/// `max_words` (default 1_000_000) guards against embedding enormous lists;
/// exceeding it is a compile error.
#[proc_macro]
pub fn include_dictionary(input: TokenStream) -> TokenStream {
    let args = syn::parse_macro_input!(input as IncludeDictionaryArgs);
    match expand(args) {
        Ok(ts) => ts.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

fn expand(args: IncludeDictionaryArgs) -> syn::Result<proc_macro2::TokenStream> {
    // Defaults
    let mut uppercase: bool = true;
    let mut max_words: usize = 1_000_000;

    for (ident, expr) in args.assignments.iter() {
        match ident.to_string().as_str() {
            "uppercase" => uppercase = bool_arg(ident, expr)?,
            "max_words" => max_words = usize_arg(ident, expr)?,
            name => {
                return Err(syn::Error::new_spanned(
                    ident,
                    format!("Unknown argument to include_dictionary: {}", name),
                ))
            }
        }
    }

    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").map_err(|_| {
        syn::Error::new(
            Span::call_site(),
            "CARGO_MANIFEST_DIR environment variable not set",
        )
    })?;
    let file_path = Path::new(&manifest_dir).join(args.path.value());

    let words = read_words(&file_path, uppercase).map_err(|e| {
        syn::Error::new_spanned(
            &args.path,
            format!(
                "include_dictionary!: failed to read dictionary file '{}': {}",
                file_path.display(),
                e
            ),
        )
    })?;

    if words.len() > max_words {
        return Err(syn::Error::new_spanned(
            &args.path,
            format!(
                "include_dictionary!: '{}' holds {} words which exceeds max_words = {}. Consider increasing `max_words` or loading the list at runtime with `Dictionary::from_path`.",
                file_path.display(),
                words.len(),
                max_words
            ),
        ));
    }

    // BTreeSet iteration is ascending, which is the order WORDS_SORTED must have.
    let word_lits: Vec<LitStr> = words
        .iter()
        .map(|w| LitStr::new(w, Span::call_site()))
        .collect();
    let set_entries = word_lits.iter();
    let sorted_entries = word_lits.iter();

    Ok(quote! {
        {
            static WORDS_PHF: ::phf::Set<&'static str> = ::phf::phf_set! {
                #( #set_entries, )*
            };

            static WORDS_SORTED: &[&str] = &[ #( #sorted_entries ),* ];

            ::spellcheckrs::EmbeddedDictionary::from_phf(&WORDS_PHF, WORDS_SORTED)
        }
    })
}
