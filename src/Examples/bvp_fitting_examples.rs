#![allow(non_snake_case)]
use crate::numerical::BVP_Galerkin::boundary::BoundaryCondition;
use crate::numerical::BVP_Galerkin::domain::Domain;
use crate::numerical::BVP_Galerkin::operator::SecondOrderOperator;
use crate::numerical::BVP_Galerkin::polynomial::Polynomial;

pub fn bvp_fitting_examples(example: usize) {
    match example {
        0 => {
            // the shortest way to get a basis-shift polynomial: a Dirichlet
            // condition at each endpoint of [0, 1]
            let lbc = BoundaryCondition::dirichlet(0.0, 0.0).unwrap();
            let ubc = BoundaryCondition::dirichlet(1.0, 1.0).unwrap();
            println!("{}", lbc);
            println!("{}", ubc);
            let poly = BoundaryCondition::fit_polynomial(&lbc, &ubc, None).unwrap();
            println!("fitted polynomial: {}", poly);
            println!("residual at lower endpoint: {}", lbc.get_polynomial_error(&poly));
            println!("residual at upper endpoint: {}", ubc.get_polynomial_error(&poly));
        }
        1 => {
            // mixed (Robin) conditions constructed from the raw a, b, c
            // coefficients; the minimal sufficient degree is derived
            // automatically
            let lbc = BoundaryCondition::new(-1.0, 1.0, 1.0, 1.0).unwrap();
            let ubc = BoundaryCondition::new(1.0, 1.0, -1.0, 0.0).unwrap();
            println!("{}", lbc);
            println!("{}", ubc);
            let poly = BoundaryCondition::fit_polynomial(&lbc, &ubc, None).unwrap();
            // this mirrored pair needs a cubic
            println!("fitted polynomial: {}", poly);
        }
        2 => {
            // a homogeneous basis family for a Galerkin expansion: one
            // polynomial per requested degree, leading coefficient 1
            let lbc = BoundaryCondition::dirichlet(0.0, 0.0).unwrap();
            let ubc = BoundaryCondition::new(1.0, 1.0, 1.0, 5.0)
                .unwrap()
                .homogeneous_copy();
            for degree in 2..=5usize {
                let phi = BoundaryCondition::fit_polynomial(&lbc, &ubc, Some(degree)).unwrap();
                println!("phi_{}: {}", degree, phi);
            }
        }
        3 => {
            // the pieces a Galerkin solver consumes downstream: a domain with
            // its integral operator and a second order differential operator
            let domain = Domain::new(0.0, 1.0).unwrap();
            let operator = SecondOrderOperator::new(&[1.0], &[0.0], &[1.0]).unwrap();
            let lbc = BoundaryCondition::dirichlet(domain.infimum(), 0.0).unwrap();
            let ubc = BoundaryCondition::dirichlet(domain.supremum(), 1.0).unwrap();
            let shift = BoundaryCondition::fit_polynomial(&lbc, &ubc, None).unwrap();
            println!("basis shift: {}", shift);
            let image = operator.apply(&shift);
            println!("L[shift] = {}", image);
            let moment = domain.integrate_polynomial(&image).unwrap();
            println!("integral of L[shift] over {}: {}", domain, moment);
            let product = &image * &Polynomial::new(vec![0.0, 1.0]).unwrap();
            println!(
                "integral of x*L[shift] over {}: {}",
                domain,
                domain.integrate_polynomial(&product).unwrap()
            );
        }
        _ => {
            println!("no example with number {}", example);
        }
    }
}
