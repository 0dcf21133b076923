//! Interactive sign-up loop

use std::io;

use anyhow::Result;
use async_trait::async_trait;
use gobarber_lib::api::UserApi;
use gobarber_lib::model::{Field, NewUser};
use gobarber_lib::navigate::{Navigator, Route};
use gobarber_lib::validation::FieldErrorMap;
use gobarber_lib::{SignUpController, SubmitOutcome};

use crate::terminal;

/// Where the form reads its answers from.
#[async_trait]
pub trait Answers: Send {
    /// Reads a visible line. `None` when input has ended.
    async fn line(&mut self) -> io::Result<Option<String>>;

    /// Reads a line without echoing it. `None` when input has ended.
    async fn secret(&mut self) -> io::Result<Option<String>>;
}

/// How the session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// The account was created.
    Registered,
    /// The user went back to the sign-in page.
    SignIn,
    /// The user gave up after a failed request.
    Abandoned,
    /// Input ended before an account was created.
    EndOfInput,
}

/// Values and inline errors of the form being filled in.
#[derive(Debug, Default)]
struct FormState {
    input: NewUser,
    errors: FieldErrorMap,
}

impl FormState {
    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.input.name = value,
            Field::Email => self.input.email = value,
            Field::Password => self.input.password = value,
        }
    }
}

/// Runs the form until it is submitted successfully, left, or input ends.
///
/// Answering any prompt with a route path follows it: `/` goes back to the
/// sign-in page, `/signup` starts the form over.
pub async fn run<A, I>(
    controller: &SignUpController<A>,
    navigator: &dyn Navigator,
    answers: &mut I,
) -> Result<Exit>
where
    A: UserApi,
    I: Answers,
{
    let mut form = FormState::default();
    terminal::heading()?;

    'form: loop {
        for field in Field::ALL {
            terminal::prompt(field, &form.errors)?;
            let answer = if field.is_secret() {
                answers.secret().await?
            } else {
                answers.line().await?
            };
            let Some(answer) = answer else {
                return Ok(Exit::EndOfInput);
            };

            match Route::from_path(answer.trim()) {
                Some(Route::SignIn) => {
                    log::info!("leaving sign-up for {}", Route::SignIn);
                    navigator.navigate(Route::SignIn);
                    return Ok(Exit::SignIn);
                }
                Some(Route::SignUp) => {
                    form = FormState::default();
                    terminal::heading()?;
                    continue 'form;
                }
                None => form.set(field, answer),
            }
        }

        let input = std::mem::take(&mut form.input);
        form.errors = FieldErrorMap::new();
        let outcome = controller.submit(input, |errors| form.errors = errors).await;

        match outcome {
            SubmitOutcome::Invalid(_) => continue,
            SubmitOutcome::Succeeded(_) => {
                log::info!("registration finished");
                return Ok(Exit::Registered);
            }
            SubmitOutcome::Failed(err) => {
                log::debug!("submission failed: {}", err);
                terminal::confirm("Try again?")?;
                match answers.line().await? {
                    Some(answer) if is_no(&answer) => {
                        return Ok(Exit::Abandoned);
                    }
                    Some(_) => continue,
                    None => return Ok(Exit::EndOfInput),
                }
            }
        }
    }
}

fn is_no(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("n") || answer.eq_ignore_ascii_case("no")
}
