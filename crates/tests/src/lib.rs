#[cfg(test)]
mod common;

#[cfg(test)]
mod doctor_list_tests;


#[cfg(test)]
mod doctor_mutation_tests;

#[cfg(test)]
mod appointment_list_tests;

#[cfg(test)]
mod doctor_dashboard_tests;

#[cfg(test)]
mod patient_tests;

#[cfg(test)]
mod login_tests;
