// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Utilities for deriving component identifiers from user-supplied strings.
//!
//! Names produced by this module contain only ASCII alphanumeric characters,
//! never start with a digit, and capitalize every word boundary, making them
//! valid exported symbols, type names and file stems across platforms.

use std::fmt;

use serde::Serialize;

use crate::error::Error;

/// Prefix applied to identifiers whose first word starts with a digit.
const LEADING_DIGIT_PREFIX: &str = "Svg";

/// PascalCase identifier naming a generated component.
///
/// Values are only obtainable through [`ComponentName::derive`], so every
/// instance upholds the identifier invariants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,)]
#[serde(transparent)]
pub struct ComponentName(String,);

impl ComponentName
{
    /// Derives a PascalCase identifier from the provided source string.
    ///
    /// The source is split on non-alphanumeric characters and on case
    /// transitions. Runs of capitals (acronyms) stay together as one word and a
    /// letter following a digit starts a new word. Each word gets its first
    /// letter capitalized and the words are concatenated.
    ///
    /// Accented Latin letters are folded to their ASCII base (`café` becomes
    /// `Cafe`, `straße` becomes `Strasse`). Any other non-ASCII character,
    /// including letters from non-Latin scripts, separates words and is
    /// dropped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Name`] when the input contains no ASCII alphanumeric
    /// characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use svgenius::ComponentName;
    ///
    /// let name = ComponentName::derive("my-icon-24",).expect("derivable",);
    /// assert_eq!(name.as_str(), "MyIcon24");
    ///
    /// let acronym = ComponentName::derive("XMLParser",).expect("derivable",);
    /// assert_eq!(acronym.as_str(), "XMLParser");
    /// ```
    pub fn derive(raw: &str,) -> Result<Self, Error,>
    {
        let words = split_words(raw,);
        if words.is_empty() {
            return Err(Error::Name {
                input: raw.to_owned(),
            },);
        }

        let mut name = String::with_capacity(raw.len() + LEADING_DIGIT_PREFIX.len(),);
        if words[0].starts_with(|ch: char| ch.is_ascii_digit(),) {
            name.push_str(LEADING_DIGIT_PREFIX,);
        }
        for word in &words {
            let mut chars = word.chars();
            if let Some(first,) = chars.next() {
                name.push(first.to_ascii_uppercase(),);
                name.push_str(chars.as_str(),);
            }
        }

        Ok(Self(name,),)
    }

    /// Borrows the identifier as a string slice.
    pub fn as_str(&self,) -> &str
    {
        &self.0
    }

    /// Consumes the identifier and returns the owned string.
    pub fn into_string(self,) -> String
    {
        self.0
    }
}

impl fmt::Display for ComponentName
{
    fn fmt(&self, f: &mut fmt::Formatter<'_,>,) -> fmt::Result
    {
        f.write_str(&self.0,)
    }
}

impl AsRef<str,> for ComponentName
{
    fn as_ref(&self,) -> &str
    {
        &self.0
    }
}

/// Splits `raw` into words on separators and case transitions.
fn split_words(raw: &str,) -> Vec<String,>
{
    let mut folded = String::with_capacity(raw.len(),);
    for ch in raw.chars() {
        match fold_latin(ch,) {
            Some(ascii,) => folded.push_str(ascii,),
            None => folded.push(ch,),
        }
    }

    let chars: Vec<char,> = folded.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (index, &candidate,) in chars.iter().enumerate() {
        if !candidate.is_ascii_alphanumeric() {
            flush(&mut current, &mut words,);
            continue;
        }

        if let Some(previous,) = current.chars().last() {
            let next = chars.get(index + 1,).copied();
            let boundary = (previous.is_ascii_lowercase() && candidate.is_ascii_uppercase())
                || (previous.is_ascii_uppercase()
                    && candidate.is_ascii_uppercase()
                    && next.is_some_and(|ch| ch.is_ascii_lowercase(),))
                || (previous.is_ascii_digit() && candidate.is_ascii_alphabetic());
            if boundary {
                flush(&mut current, &mut words,);
            }
        }

        current.push(candidate,);
    }

    flush(&mut current, &mut words,);
    words
}

/// ASCII replacement for accented Latin letters.
fn fold_latin(ch: char,) -> Option<&'static str,>
{
    let ascii = match ch {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => "a",
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' | 'Ā' | 'Ă' | 'Ą' => "A",
        'æ' => "ae",
        'Æ' => "AE",
        'ç' | 'ć' | 'č' => "c",
        'Ç' | 'Ć' | 'Č' => "C",
        'ď' | 'đ' => "d",
        'Ď' | 'Đ' => "D",
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => "e",
        'È' | 'É' | 'Ê' | 'Ë' | 'Ē' | 'Ė' | 'Ę' | 'Ě' => "E",
        'ğ' => "g",
        'Ğ' => "G",
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'į' | 'ı' => "i",
        'Ì' | 'Í' | 'Î' | 'Ï' | 'Ī' | 'Į' | 'İ' => "I",
        'ł' => "l",
        'Ł' => "L",
        'ñ' | 'ń' | 'ň' => "n",
        'Ñ' | 'Ń' | 'Ň' => "N",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => "o",
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' | 'Ō' | 'Ő' => "O",
        'œ' => "oe",
        'Œ' => "OE",
        'ř' => "r",
        'Ř' => "R",
        'ś' | 'š' | 'ş' => "s",
        'Ś' | 'Š' | 'Ş' => "S",
        'ß' => "ss",
        'ť' | 'ţ' => "t",
        'Ť' | 'Ţ' => "T",
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' | 'ų' => "u",
        'Ù' | 'Ú' | 'Û' | 'Ü' | 'Ū' | 'Ů' | 'Ű' | 'Ų' => "U",
        'ý' | 'ÿ' => "y",
        'Ý' | 'Ÿ' => "Y",
        'ź' | 'ż' | 'ž' => "z",
        'Ź' | 'Ż' | 'Ž' => "Z",
        _ => return None,
    };
    Some(ascii,)
}

fn flush(current: &mut String, words: &mut Vec<String,>,)
{
    if !current.is_empty() {
        words.push(std::mem::take(current,),);
    }
}
